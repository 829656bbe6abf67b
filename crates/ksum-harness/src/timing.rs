use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use ksum_core::{Algorithm, CountError, Workload};
use serde::{Deserialize, Serialize};

use crate::{config::HarnessConfig, input::InputGenerator};

/// One timed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub size: usize,
    pub elapsed: Duration,
    pub work_units: u64,
}

/// All trials of one input size, averaged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub trials: usize,
    pub mean_secs: f64,
    /// Work units of the last trial.
    pub work_units: u64,
}

/// Time a single call of `workload` on `input`.
pub fn measure(workload: &dyn Workload, input: &[i64]) -> Result<Sample, CountError> {
    let start = Instant::now();
    let work_units = workload.run(std::hint::black_box(input))?;
    let elapsed = start.elapsed();

    Ok(Sample {
        size: input.len(),
        elapsed,
        work_units,
    })
}

/// Run `config.trial_count` rounds over every configured size and average the
/// timings per size.
///
/// Each round draws a fresh input for every size from a generator seeded with
/// `config.seed`, so every algorithm sees the same sequence of inputs.
pub fn run_trials(config: &HarnessConfig, algorithm: Algorithm) -> Result<Vec<Measurement>> {
    let workload = Algorithm::create_workload(algorithm);
    let mut generator = InputGenerator::new(config.seed, config.input, config.value_range);
    let mut samples: Vec<Vec<Sample>> =
        vec![Vec::with_capacity(config.trial_count); config.sizes.len()];

    for trial in 0..config.trial_count {
        log::debug!("{algorithm}: trial {}/{}", trial + 1, config.trial_count);
        for (slot, &size) in samples.iter_mut().zip(&config.sizes) {
            let input = generator.generate(size);
            let sample = measure(workload.as_ref(), &input)
                .with_context(|| format!("{algorithm} failed on an input of size {size}"))?;
            log::trace!(
                "{algorithm}: n = {size}, {:?}, {} {}",
                sample.elapsed,
                sample.work_units,
                algorithm.work_unit()
            );
            slot.push(sample);
        }
    }

    let measurements: Vec<Measurement> = samples
        .iter()
        .zip(&config.sizes)
        .map(|(trials, &size)| summarize(size, trials))
        .collect();

    for m in &measurements {
        log::info!(
            "{algorithm}: n = {} averaged {:.6}s over {} trials",
            m.size,
            m.mean_secs,
            m.trials
        );
    }
    Ok(measurements)
}

fn summarize(size: usize, trials: &[Sample]) -> Measurement {
    let total: f64 = trials.iter().map(|s| s.elapsed.as_secs_f64()).sum();
    let mean_secs = if trials.is_empty() {
        0.0
    } else {
        total / trials.len() as f64
    };

    Measurement {
        size,
        trials: trials.len(),
        mean_secs,
        work_units: trials.last().map_or(0, |s| s.work_units),
    }
}
