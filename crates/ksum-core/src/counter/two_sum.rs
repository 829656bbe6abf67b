use std::collections::{HashMap, HashSet};

use super::{ZeroSum, choose_two};

/// Count unordered index pairs `i < j` with `arr[i] + arr[j] == 0` by checking
/// every pair.
///
/// Work units are comparisons, always `n * (n - 1) / 2`.
pub fn two_sum_brute_force(arr: &[i64]) -> ZeroSum {
    let mut count = 0;
    let mut comparisons = 0;

    for (i, &a) in arr.iter().enumerate() {
        for &b in &arr[i + 1..] {
            comparisons += 1;
            if i128::from(a) + i128::from(b) == 0 {
                count += 1;
            }
        }
    }

    debug_assert_eq!(comparisons, choose_two(arr.len() as u64));
    log::trace!("two-sum brute force over {} values: {count} pairs", arr.len());
    ZeroSum::new(count, comparisons)
}

/// Count the same pairs as [`two_sum_brute_force`] from a frequency map.
///
/// Work units are hash-table lookups: one per element while building the map,
/// then one per distinct value visited.
pub fn two_sum_hash_table(arr: &[i64]) -> ZeroSum {
    let mut frequency: HashMap<i64, u64> = HashMap::with_capacity(arr.len());
    let mut lookups = 0;

    for &num in arr {
        *frequency.entry(num).or_insert(0) += 1;
        lookups += 1;
    }

    let mut count = 0;
    let mut processed = HashSet::new();

    #[expect(clippy::iter_over_hash_type)]
    for (&num, &freq) in &frequency {
        lookups += 1;

        if processed.contains(&num) {
            continue;
        }

        if num == 0 {
            // zeros pair among themselves: C(freq, 2), never freq * freq
            count += choose_two(freq);
            processed.insert(num);
        } else if let Some(partner) = num.checked_neg().and_then(|neg| frequency.get(&neg)) {
            count += freq * partner;
            processed.insert(num);
            processed.insert(-num);
        }
    }

    log::trace!(
        "two-sum hash table over {} values ({} distinct): {count} pairs",
        arr.len(),
        frequency.len()
    );
    ZeroSum::new(count, lookups)
}
