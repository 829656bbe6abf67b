use super::Sorted;

/// Selection sort into a new vector.
///
/// Each pass finds the index of the minimum in the unsorted tail and swaps it
/// to the front of that tail, so duplicates are handled by position rather than
/// by value. Comparisons are always `n * (n - 1) / 2`.
pub fn selection_sort<T: Ord + Clone>(data: &[T]) -> Sorted<T> {
    let mut values = data.to_vec();
    let mut comparisons = 0;

    for start in 0..values.len() {
        let mut min_idx = start;
        for idx in start + 1..values.len() {
            comparisons += 1;
            if values[idx] < values[min_idx] {
                min_idx = idx;
            }
        }
        values.swap(start, min_idx);
    }

    Sorted {
        values,
        comparisons,
    }
}
