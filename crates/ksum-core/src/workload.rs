use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::counter::{three_sum_brute_force, two_sum_brute_force, two_sum_hash_table};
use crate::error::CountError;
use crate::sort::{merge_sort, selection_sort};

/// Every algorithm the timing harness knows how to drive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    TwoSumBruteForce,
    TwoSumHashTable,
    ThreeSumBruteForce,
    SelectionSort,
    MergeSort,
}

impl AsRef<Self> for Algorithm {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl Algorithm {
    pub fn create_workload(algorithm: impl AsRef<Self>) -> Box<dyn Workload> {
        match algorithm.as_ref() {
            Self::TwoSumBruteForce => Box::new(TwoSumBruteForce),
            Self::TwoSumHashTable => Box::new(TwoSumHashTable),
            Self::ThreeSumBruteForce => Box::new(ThreeSumBruteForce),
            Self::SelectionSort => Box::new(SelectionSort),
            Self::MergeSort => Box::new(MergeSort),
        }
    }

    /// Smallest input length the algorithm accepts.
    pub fn min_input_len(&self) -> usize {
        match self {
            Self::ThreeSumBruteForce => 3,
            Self::TwoSumBruteForce
            | Self::TwoSumHashTable
            | Self::SelectionSort
            | Self::MergeSort => 0,
        }
    }

    /// Human readable name of the unit `Workload::run` reports.
    pub fn work_unit(&self) -> &'static str {
        match self {
            Self::TwoSumHashTable => "lookups",
            Self::TwoSumBruteForce
            | Self::ThreeSumBruteForce
            | Self::SelectionSort
            | Self::MergeSort => "comparisons",
        }
    }
}

/// A runnable algorithm, reduced to the work units it spends on an input.
pub trait Workload: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn run(&self, input: &[i64]) -> Result<u64, CountError>;
}

struct TwoSumBruteForce;

impl Workload for TwoSumBruteForce {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TwoSumBruteForce
    }

    fn run(&self, input: &[i64]) -> Result<u64, CountError> {
        Ok(two_sum_brute_force(input).work_units)
    }
}

struct TwoSumHashTable;

impl Workload for TwoSumHashTable {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TwoSumHashTable
    }

    fn run(&self, input: &[i64]) -> Result<u64, CountError> {
        Ok(two_sum_hash_table(input).work_units)
    }
}

struct ThreeSumBruteForce;

impl Workload for ThreeSumBruteForce {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ThreeSumBruteForce
    }

    fn run(&self, input: &[i64]) -> Result<u64, CountError> {
        three_sum_brute_force(input).map(|result| result.work_units)
    }
}

struct SelectionSort;

impl Workload for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SelectionSort
    }

    fn run(&self, input: &[i64]) -> Result<u64, CountError> {
        Ok(selection_sort(input).comparisons)
    }
}

struct MergeSort;

impl Workload for MergeSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MergeSort
    }

    fn run(&self, input: &[i64]) -> Result<u64, CountError> {
        Ok(merge_sort(input).comparisons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Algorithm::ThreeSumBruteForce.to_string(), "three-sum-brute-force");
        assert_eq!("merge-sort".parse::<Algorithm>(), Ok(Algorithm::MergeSort));
        assert!("bogo-sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_factory_matches_variant() {
        for algorithm in Algorithm::iter() {
            assert_eq!(Algorithm::create_workload(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_workloads_report_work_units() {
        let input = [5, -5, 10, -10, 5, -5];
        let units: Vec<_> = Algorithm::iter()
            .map(|algorithm| Algorithm::create_workload(algorithm).run(&input))
            .collect();
        assert_eq!(units[0], Ok(15));
        assert_eq!(units[1], Ok(10));
        assert_eq!(units[2], Ok(20));
        assert_eq!(units[3], Ok(15));
    }

    #[test]
    fn test_min_input_len_is_enforced() {
        for algorithm in Algorithm::iter() {
            let short = vec![1; algorithm.min_input_len().saturating_sub(1)];
            let workload = Algorithm::create_workload(algorithm);
            if algorithm.min_input_len() > 0 {
                assert!(workload.run(&short).is_err(), "{algorithm} accepted {short:?}");
            }
            let enough = vec![1; algorithm.min_input_len()];
            assert!(workload.run(&enough).is_ok(), "{algorithm} rejected {enough:?}");
        }
    }
}
