//! Power-law fitting of `(input size, seconds)` observations.
//!
//! Runtimes of polynomial algorithms follow `t = a * n^b`, which is a straight
//! line in log-log space: `log t = b * log n + log a`. The slope `b` estimates
//! the exponent of the algorithm's complexity.

use serde::{Deserialize, Serialize};

use crate::timing::Measurement;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("at least 2 observations are required, got {0}")]
    TooFewPoints(usize),

    #[error("observation (n = {size}, t = {time}) is not strictly positive")]
    NonPositive { size: f64, time: f64 },

    #[error("all observations share the same input size")]
    DegenerateSizes,
}

/// A single `(size, seconds)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub size: f64,
    pub time: f64,
}

impl Point {
    pub fn new(size: f64, time: f64) -> Self {
        Self { size, time }
    }

    fn logs(self) -> Result<(f64, f64), FitError> {
        if self.size > 0.0 && self.time > 0.0 {
            Ok((self.size.log10(), self.time.log10()))
        } else {
            Err(FitError::NonPositive {
                size: self.size,
                time: self.time,
            })
        }
    }
}

impl From<&Measurement> for Point {
    fn from(m: &Measurement) -> Self {
        Self::new(m.size as f64, m.mean_secs)
    }
}

/// `t(n) = a * n^b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLaw {
    pub a: f64,
    pub b: f64,
}

impl PowerLaw {
    pub fn project(&self, size: f64) -> f64 {
        self.a * size.powf(self.b)
    }
}

/// Least-squares line through `(log10 n, log10 t)`; `a = 10^intercept`.
pub fn fit_least_squares(points: &[Point]) -> Result<PowerLaw, FitError> {
    if points.len() < 2 {
        return Err(FitError::TooFewPoints(points.len()));
    }

    let logs = points
        .iter()
        .map(|p| p.logs())
        .collect::<Result<Vec<_>, _>>()?;

    let len = logs.len() as f64;
    let mean_x = logs.iter().map(|&(x, _)| x).sum::<f64>() / len;
    let mean_y = logs.iter().map(|&(_, y)| y).sum::<f64>() / len;

    let (sxy, sxx) = logs.iter().fold((0.0, 0.0), |(sxy, sxx), &(x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    if sxx <= f64::EPSILON {
        return Err(FitError::DegenerateSizes);
    }

    let b = sxy / sxx;
    let intercept = mean_y - b * mean_x;
    Ok(PowerLaw {
        a: 10f64.powf(intercept),
        b,
    })
}

/// Exponent estimated from two observations only. The ratio of logarithms is
/// the same in any base.
pub fn two_point_slope(first: Point, second: Point) -> Result<f64, FitError> {
    let (x1, y1) = first.logs()?;
    let (x2, y2) = second.logs()?;
    if (x2 - x1).abs() <= f64::EPSILON {
        return Err(FitError::DegenerateSizes);
    }
    Ok((y2 - y1) / (x2 - x1))
}

/// `t[i] / t[i - 1]` for each consecutive pair of observations.
///
/// When sizes double, an `N^2` algorithm approaches 4 and an `N^3` one 8.
pub fn growth_ratios(points: &[Point]) -> Vec<f64> {
    points
        .windows(2)
        .map(|w| {
            if w[0].time > 0.0 {
                w[1].time / w[0].time
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Empirical minus projected time for every observation.
pub fn residuals(points: &[Point], law: &PowerLaw) -> Vec<f64> {
    points.iter().map(|p| p.time - law.project(p.size)).collect()
}

/// A row comparing an observed time with the fitted law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub size: f64,
    pub empirical: Option<f64>,
    pub projected: f64,
    /// `|empirical - projected| / empirical * 100`
    pub error_pct: Option<f64>,
}

/// Rows for every observation, followed by pure projections for `extra_sizes`.
pub fn projections(points: &[Point], law: &PowerLaw, extra_sizes: &[usize]) -> Vec<Projection> {
    let observed = points.iter().map(|p| {
        let projected = law.project(p.size);
        Projection {
            size: p.size,
            empirical: Some(p.time),
            projected,
            error_pct: (p.time > 0.0).then(|| (p.time - projected).abs() / p.time * 100.0),
        }
    });

    let extrapolated = extra_sizes.iter().map(|&n| Projection {
        size: n as f64,
        empirical: None,
        projected: law.project(n as f64),
        error_pct: None,
    });

    observed.chain(extrapolated).collect()
}
