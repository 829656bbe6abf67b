use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod pair;
mod three_sum;
mod two_sum;

pub use pair::{PairSearch, find_pair_brute_force, find_pair_hash_table};
pub use three_sum::three_sum_brute_force;
pub use two_sum::{two_sum_brute_force, two_sum_hash_table};

/// Outcome of a zero-sum count: matches found and the work spent finding them.
///
/// `work_units` is comparisons for the brute-force strategies and hash-table
/// lookups for the hashing strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZeroSum {
    pub count: u64,
    pub work_units: u64,
}

impl ZeroSum {
    pub fn new(count: u64, work_units: u64) -> Self {
        Self { count, work_units }
    }
}

impl From<ZeroSum> for (u64, u64) {
    fn from(value: ZeroSum) -> Self {
        (value.count, value.work_units)
    }
}

impl Display for ZeroSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "count: {}, work units: {}", self.count, self.work_units)
    }
}

/// Number of ways to choose 2 out of `n`.
pub(crate) fn choose_two(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

/// Number of ways to choose 3 out of `n`.
pub(crate) fn choose_three(n: u64) -> u64 {
    n * n.saturating_sub(1) * n.saturating_sub(2) / 6
}
