use super::Sorted;

/// Top-down merge sort into a new vector.
///
/// Splits at the midpoint down to single elements, so a two-element input is
/// split and merged like any other. Ties are taken from the left run, which
/// keeps the sort stable. Comparisons count head-to-head checks during merges.
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Sorted<T> {
    let mut comparisons = 0;
    let values = sort_into(data, &mut comparisons);
    Sorted {
        values,
        comparisons,
    }
}

fn sort_into<T: Ord + Clone>(data: &[T], comparisons: &mut u64) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = sort_into(&data[..mid], comparisons);
    let right = sort_into(&data[mid..], comparisons);
    merge(&left, &right, comparisons)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], comparisons: &mut u64) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        *comparisons += 1;
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
