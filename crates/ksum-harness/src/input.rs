use std::collections::HashSet;

use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};

use crate::config::InputProfile;

/// Deterministic source of input sequences for one harness run.
pub struct InputGenerator {
    rng: StdRng,
    profile: InputProfile,
    value_range: i64,
}

impl InputGenerator {
    pub fn new(seed: u64, profile: InputProfile, value_range: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            profile,
            value_range,
        }
    }

    /// Next input of length `n`.
    pub fn generate(&mut self, n: usize) -> Vec<i64> {
        match self.profile {
            InputProfile::Random => random_values(&mut self.rng, n, self.value_range),
            InputProfile::Distinct => distinct_values(&mut self.rng, n),
            InputProfile::Permutation => permutation(&mut self.rng, n),
        }
    }
}

/// `n` values drawn uniformly from `[-range, range]`.
pub fn random_values(rng: &mut StdRng, n: usize, range: i64) -> Vec<i64> {
    let range = range.abs();
    (0..n).map(|_| rng.gen_range(-range..=range)).collect()
}

/// `n` distinct values drawn from `[-10n, 10n]`, in the order they were drawn.
pub fn distinct_values(rng: &mut StdRng, n: usize) -> Vec<i64> {
    let bound = i64::try_from(n).unwrap_or(i64::MAX / 10).saturating_mul(10);
    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);

    while values.len() < n {
        let value = rng.gen_range(-bound..=bound);
        if seen.insert(value) {
            values.push(value);
        }
    }
    values
}

/// A shuffled permutation of `1..=n`.
pub fn permutation(rng: &mut StdRng, n: usize) -> Vec<i64> {
    let upper = i64::try_from(n).unwrap_or(i64::MAX);
    let mut values: Vec<i64> = (1..=upper).collect();
    values.shuffle(rng);
    values
}
