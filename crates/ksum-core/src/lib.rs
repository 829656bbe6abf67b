//! Zero-sum counting and sorting baselines instrumented with work-unit counters.
//!
//! Every algorithm returns the number of elementary operations it performed next
//! to its result, so callers can compare strategies by operation count as well as
//! by wall-clock time.

pub mod counter;
pub mod error;
pub mod sort;
pub mod workload;

pub use counter::{
    PairSearch, ZeroSum, find_pair_brute_force, find_pair_hash_table, three_sum_brute_force,
    two_sum_brute_force, two_sum_hash_table,
};
pub use error::CountError;
pub use sort::{Sorted, is_sorted, merge_sort, selection_sort};
pub use workload::{Algorithm, Workload};
