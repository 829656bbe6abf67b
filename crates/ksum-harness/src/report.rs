use std::fmt::Display;

use anyhow::{Context as _, Result};
use console::style;
use ksum_core::Algorithm;
use serde::Serialize;

use crate::{
    config::{HarnessConfig, InputProfile},
    regression::{
        self, Point, PowerLaw, Projection, fit_least_squares, growth_ratios, two_point_slope,
    },
    timing::Measurement,
};

/// Timings of one algorithm together with the power law fitted to them.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub work_unit: &'static str,
    pub generated_at: String,
    pub seed: u64,
    pub trial_count: usize,
    pub input: InputProfile,
    pub measurements: Vec<Measurement>,
    pub fit: Option<PowerLaw>,
    pub fit_error: Option<String>,
    pub two_point_slope: Option<f64>,
    pub projections: Vec<Projection>,
    pub growth_ratios: Vec<f64>,
    pub residuals: Vec<f64>,
}

impl Report {
    pub fn build(config: &HarnessConfig, algorithm: Algorithm, measurements: Vec<Measurement>) -> Self {
        let points: Vec<Point> = measurements.iter().map(Point::from).collect();

        let (fit, fit_error) = match fit_least_squares(&points) {
            Ok(law) => (Some(law), None),
            Err(e) => {
                log::warn!("{algorithm}: could not fit a power law: {e}");
                (None, Some(e.to_string()))
            }
        };

        let two_point_slope = match points.as_slice() {
            [first, second, ..] => two_point_slope(*first, *second).ok(),
            _ => None,
        };

        let (projections, residuals) = fit.as_ref().map_or_else(
            || (Vec::new(), Vec::new()),
            |law| {
                (
                    regression::projections(&points, law, &config.project_sizes),
                    regression::residuals(&points, law),
                )
            },
        );

        Self {
            algorithm,
            work_unit: algorithm.work_unit(),
            generated_at: chrono::Local::now().to_rfc3339(),
            seed: config.seed,
            trial_count: config.trial_count,
            input: config.input,
            growth_ratios: growth_ratios(&points),
            measurements,
            fit,
            fit_error,
            two_point_slope,
            projections,
            residuals,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize report for {}", self.algorithm))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} (seed {}, {} trials, {} input, {})",
            style(self.algorithm).cyan().bold(),
            self.seed,
            self.trial_count,
            self.input,
            self.generated_at
        )?;

        writeln!(f, "{:>10} | {:>14} | {:>16}", "Array Size", "Runtime (s)", self.work_unit)?;
        writeln!(f, "{}", "-".repeat(46))?;
        for m in &self.measurements {
            writeln!(f, "{:>10} | {:>14.6} | {:>16}", m.size, m.mean_secs, m.work_units)?;
        }

        if let Some(law) = &self.fit {
            writeln!(f)?;
            writeln!(
                f,
                "Fitted: T(N) = {:.6e} * N^{}",
                law.a,
                style(format!("{:.4}", law.b)).green().bold()
            )?;
        }
        if let Some(error) = &self.fit_error {
            writeln!(f, "{}", style(format!("No fit: {error}")).yellow())?;
        }
        if let Some(slope) = self.two_point_slope {
            writeln!(f, "Two-point slope b = {slope:.4}")?;
        }

        if !self.growth_ratios.is_empty() {
            let ratios: Vec<String> = self.growth_ratios.iter().map(|r| format!("{r:.2}")).collect();
            writeln!(f, "Growth ratios T(N_i)/T(N_i-1): {}", ratios.join(", "))?;
        }

        if !self.projections.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{:>10} | {:>14} | {:>14} | {:>10}",
                "N", "Empirical", "Projected", "Error (%)"
            )?;
            writeln!(f, "{}", "-".repeat(58))?;
            for row in &self.projections {
                writeln!(
                    f,
                    "{:>10} | {:>14} | {:>14.6} | {:>10}",
                    row.size,
                    row.empirical.map_or("--".to_owned(), |t| format!("{t:.6}")),
                    row.projected,
                    row.error_pct.map_or("--".to_owned(), |e| format!("{e:.2}")),
                )?;
            }
        }

        Ok(())
    }
}
