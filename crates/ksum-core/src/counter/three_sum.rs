use super::{ZeroSum, choose_three};
use crate::error::CountError;

const MIN_LEN: usize = 3;

/// Count unordered index triples `i < j < k` whose values sum to zero.
///
/// Every triple is examined exactly once, so the work units (comparisons) are
/// always `C(n, 3)`.
///
/// # Errors
/// Returns [`CountError::TooFewElements`] when `arr` holds fewer than three values.
pub fn three_sum_brute_force(arr: &[i64]) -> Result<ZeroSum, CountError> {
    let n = arr.len();
    if n < MIN_LEN {
        return Err(CountError::TooFewElements {
            required: MIN_LEN,
            actual: n,
        });
    }

    let mut count = 0;
    let mut comparisons = 0;

    for i in 0..n - 2 {
        let a = i128::from(arr[i]);
        for j in i + 1..n - 1 {
            let ab = a + i128::from(arr[j]);
            for &c in &arr[j + 1..] {
                comparisons += 1;
                if ab + i128::from(c) == 0 {
                    count += 1;
                }
            }
        }
    }

    debug_assert_eq!(comparisons, choose_three(n as u64));
    log::trace!("three-sum brute force over {n} values: {count} triplets");
    Ok(ZeroSum::new(count, comparisons))
}
