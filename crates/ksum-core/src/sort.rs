use serde::{Deserialize, Serialize};

mod merge;
mod selection;

pub use merge::merge_sort;
pub use selection::selection_sort;

/// A freshly allocated sorted copy of the input and the element comparisons
/// needed to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorted<T> {
    pub values: Vec<T>,
    pub comparisons: u64,
}

impl<T> Sorted<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

/// `true` when `data` is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
