use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// First index pair found whose values add up to a target, with the work spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSearch {
    pub pair: Option<(usize, usize)>,
    pub work_units: u64,
}

/// Scan index pairs in `(i, j)` order and stop at the first whose values sum to
/// `target`. Work units are comparisons.
pub fn find_pair_brute_force(nums: &[i64], target: i64) -> PairSearch {
    let target = i128::from(target);
    let mut comparisons = 0;

    for (i, &a) in nums.iter().enumerate() {
        for (j, &b) in nums.iter().enumerate().skip(i + 1) {
            comparisons += 1;
            if i128::from(a) + i128::from(b) == target {
                return PairSearch {
                    pair: Some((i, j)),
                    work_units: comparisons,
                };
            }
        }
    }

    PairSearch {
        pair: None,
        work_units: comparisons,
    }
}

/// One pass over `nums`, looking up each value's complement among the values
/// already seen. Work units are lookups, one per element visited.
///
/// Reports the pair with the smallest second index; the first index is the
/// earliest occurrence of the complement.
pub fn find_pair_hash_table(nums: &[i64], target: i64) -> PairSearch {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    let mut lookups = 0;

    for (j, &num) in nums.iter().enumerate() {
        lookups += 1;

        let complement = i64::try_from(i128::from(target) - i128::from(num)).ok();
        if let Some(&i) = complement.and_then(|c| seen.get(&c)) {
            return PairSearch {
                pair: Some((i, j)),
                work_units: lookups,
            };
        }

        seen.entry(num).or_insert(j);
    }

    PairSearch {
        pair: None,
        work_units: lookups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

    #[test]
    fn test_classic_example() {
        let nums = [2, 7, 11, 15];
        assert_eq!(
            find_pair_brute_force(&nums, 9),
            PairSearch {
                pair: Some((0, 1)),
                work_units: 1
            }
        );
        assert_eq!(
            find_pair_hash_table(&nums, 9),
            PairSearch {
                pair: Some((0, 1)),
                work_units: 2
            }
        );
    }

    #[test]
    fn test_no_pair() {
        let nums = [1, 2, 3, 4];
        assert_eq!(find_pair_brute_force(&nums, 100).pair, None);
        assert_eq!(find_pair_brute_force(&nums, 100).work_units, 6);
        assert_eq!(find_pair_hash_table(&nums, 100).pair, None);
        assert_eq!(find_pair_hash_table(&nums, 100).work_units, 4);
    }

    #[test]
    fn test_strategies_may_pick_different_pairs() {
        let nums = [1, 5, -5, -1];
        assert_eq!(find_pair_brute_force(&nums, 0).pair, Some((0, 3)));
        assert_eq!(find_pair_hash_table(&nums, 0).pair, Some((1, 2)));
    }

    #[test]
    fn test_duplicate_value_uses_first_index() {
        let nums = [3, 3, 3];
        assert_eq!(find_pair_hash_table(&nums, 6).pair, Some((0, 1)));
        assert_eq!(find_pair_brute_force(&nums, 6).pair, Some((0, 1)));
    }

    #[test]
    fn test_strategies_agree_on_existence() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let len = rng.gen_range(0..20);
            let nums: Vec<i64> = (0..len).map(|_| rng.gen_range(-20..=20)).collect();
            let target = rng.gen_range(-10..=10);

            let brute = find_pair_brute_force(&nums, target);
            let hashed = find_pair_hash_table(&nums, target);
            assert_eq!(brute.pair.is_some(), hashed.pair.is_some());

            for (i, j) in [brute.pair, hashed.pair].into_iter().flatten() {
                assert!(i < j, "indices out of order: ({i}, {j})");
                assert_eq!(nums[i] + nums[j], target);
            }
        }
    }
}
