use ksum_core::{
    Algorithm, is_sorted, merge_sort, selection_sort, two_sum_brute_force, two_sum_hash_table,
};
use serde::Serialize;

use crate::{config::HarnessConfig, input::InputGenerator};

/// Algorithms exercised by [`cross_check`].
pub const CROSS_CHECKED: [Algorithm; 4] = [
    Algorithm::TwoSumBruteForce,
    Algorithm::TwoSumHashTable,
    Algorithm::SelectionSort,
    Algorithm::MergeSort,
];

/// An input on which two strategies that must agree did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Mismatch {
    TwoSumCount {
        size: usize,
        trial: usize,
        brute_force: u64,
        hash_table: u64,
    },
    SortOrder {
        size: usize,
        trial: usize,
        position: usize,
        selection: i64,
        merge: i64,
    },
    Unsorted {
        size: usize,
        trial: usize,
        algorithm: Algorithm,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub inputs: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckSummary {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run both 2-sum strategies and both sorts over the same generated inputs as
/// a timing run would, and collect every disagreement.
pub fn cross_check(config: &HarnessConfig) -> CheckSummary {
    let mut generator = InputGenerator::new(config.seed, config.input, config.value_range);
    let mut summary = CheckSummary::default();

    for trial in 0..config.trial_count {
        for &size in &config.sizes {
            let input = generator.generate(size);
            summary.inputs += 1;

            let brute = two_sum_brute_force(&input);
            let hashed = two_sum_hash_table(&input);
            if brute.count != hashed.count {
                log::error!(
                    "2-sum mismatch on n = {size}: brute force {brute}, hash table {hashed}"
                );
                summary.mismatches.push(Mismatch::TwoSumCount {
                    size,
                    trial,
                    brute_force: brute.count,
                    hash_table: hashed.count,
                });
            }

            let selection = selection_sort(&input).into_vec();
            let merge = merge_sort(&input).into_vec();
            if let Some(mismatch) = compare_sorts(size, trial, &selection, &merge) {
                log::error!("sort mismatch on n = {size}: {mismatch:?}");
                summary.mismatches.push(mismatch);
            }
        }
    }

    log::info!(
        "Cross-checked {} inputs, {} mismatches",
        summary.inputs,
        summary.mismatches.len()
    );
    summary
}

/// First problem with a pair of sort outputs: either one out of order, or the
/// two disagreeing at some position.
fn compare_sorts(
    size: usize,
    trial: usize,
    selection: &[i64],
    merge: &[i64],
) -> Option<Mismatch> {
    for (algorithm, values) in [
        (Algorithm::SelectionSort, selection),
        (Algorithm::MergeSort, merge),
    ] {
        if !is_sorted(values) {
            return Some(Mismatch::Unsorted {
                size,
                trial,
                algorithm,
            });
        }
    }

    selection
        .iter()
        .zip(merge)
        .enumerate()
        .find(|(_, (a, b))| a != b)
        .map(|(position, (&a, &b))| Mismatch::SortOrder {
            size,
            trial,
            position,
            selection: a,
            merge: b,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputProfile;

    #[test]
    fn test_cross_check_passes_for_every_profile() {
        for input in [
            InputProfile::Random,
            InputProfile::Distinct,
            InputProfile::Permutation,
        ] {
            let config = HarnessConfig {
                trial_count: 3,
                sizes: vec![0, 1, 2, 17, 64],
                value_range: 5,
                input,
                ..HarnessConfig::default()
            };
            let summary = cross_check(&config);
            assert_eq!(summary.inputs, 15);
            assert!(summary.passed(), "{input}: {:?}", summary.mismatches);
        }
    }

    #[test]
    fn test_compare_sorts() {
        assert_eq!(compare_sorts(3, 0, &[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(
            compare_sorts(3, 1, &[1, 2, 3], &[1, 2, 4]),
            Some(Mismatch::SortOrder {
                size: 3,
                trial: 1,
                position: 2,
                selection: 3,
                merge: 4,
            })
        );
        // Identical but out of order outputs must still be caught.
        assert_eq!(
            compare_sorts(2, 0, &[2, 1], &[2, 1]),
            Some(Mismatch::Unsorted {
                size: 2,
                trial: 0,
                algorithm: Algorithm::SelectionSort,
            })
        );
        assert_eq!(
            compare_sorts(2, 0, &[1, 2], &[2, 1]),
            Some(Mismatch::Unsorted {
                size: 2,
                trial: 0,
                algorithm: Algorithm::MergeSort,
            })
        );
    }
}
