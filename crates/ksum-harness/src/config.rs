use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use ksum_core::Algorithm;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::check::CROSS_CHECKED;

pub const DEFAULT_CONFIG_FILE: &str = "ksum.toml";
pub const DEFAULT_SEED: u64 = 54321;

const SEED_VAR: &str = "KSUM_SEED";
const TRIALS_VAR: &str = "KSUM_TRIALS";

/// How many trials to average per input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RunMode {
    /// One trial per size.
    Quick,
    /// Ten trials per size.
    Full,
}

impl RunMode {
    pub fn trial_count(self) -> usize {
        match self {
            Self::Quick => 1,
            Self::Full => 10,
        }
    }
}

/// Shape of the generated input sequences.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InputProfile {
    /// Values drawn uniformly from `[-value_range, value_range]`, duplicates allowed.
    #[default]
    Random,
    /// `n` distinct values drawn from `[-10n, 10n]`.
    Distinct,
    /// A shuffled permutation of `1..=n`.
    Permutation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("trial count must be at least 1")]
    NoTrials,

    #[error("no input sizes configured")]
    NoSizes,

    #[error("no algorithms configured")]
    NoAlgorithms,

    #[error("value range must be positive, got {0}")]
    NonPositiveRange(i64),

    #[error("{algorithm} needs inputs of at least {min} elements, but size {size} is configured")]
    SizeTooSmall {
        algorithm: Algorithm,
        size: usize,
        min: usize,
    },
}

/// Everything a timing run needs. Loaded from TOML, then overridden by the
/// environment and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub seed: u64,
    pub trial_count: usize,
    pub sizes: Vec<usize>,
    pub value_range: i64,
    pub input: InputProfile,
    pub algorithms: Vec<Algorithm>,
    pub project_sizes: Vec<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            trial_count: RunMode::Full.trial_count(),
            sizes: vec![50, 100, 200, 400, 800],
            value_range: 100,
            input: InputProfile::Random,
            algorithms: vec![Algorithm::ThreeSumBruteForce],
            project_sizes: vec![1600, 3200],
        }
    }
}

impl HarnessConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `ksum.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_toml_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using default config");
                Self::default()
            }
        };

        config.apply_env();
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", config_path.display()))?;

        log::debug!("Loaded config from: {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `KSUM_SEED` and `KSUM_TRIALS` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. A seed that does not parse falls back to
    /// [`DEFAULT_SEED`]; an unparsable trial count is ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(SEED_VAR) {
            self.seed = raw.trim().parse().unwrap_or_else(|e| {
                log::warn!("Invalid {SEED_VAR} '{raw}': {e}, using default seed {DEFAULT_SEED}");
                DEFAULT_SEED
            });
        }

        if let Some(raw) = lookup(TRIALS_VAR) {
            match raw.trim().parse() {
                Ok(trials) => self.trial_count = trials,
                Err(e) => log::warn!("Ignoring invalid {TRIALS_VAR} '{raw}': {e}"),
            }
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.trial_count = mode.trial_count();
        self
    }

    /// Check the config before a timing run of every configured algorithm.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_inputs()?;
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }

        // Timings are fitted in log space, so every size must be at least 1.
        for &algorithm in &self.algorithms {
            self.check_sizes(algorithm, algorithm.min_input_len().max(1))?;
        }
        Ok(())
    }

    /// Check the config before a cross-check run. Only the algorithms the
    /// cross-check runs constrain the sizes; `algorithms` is ignored.
    pub fn validate_cross_check(&self) -> Result<(), ConfigError> {
        self.validate_inputs()?;
        for algorithm in CROSS_CHECKED {
            self.check_sizes(algorithm, algorithm.min_input_len())?;
        }
        Ok(())
    }

    fn validate_inputs(&self) -> Result<(), ConfigError> {
        if self.trial_count == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if self.value_range <= 0 {
            return Err(ConfigError::NonPositiveRange(self.value_range));
        }
        Ok(())
    }

    fn check_sizes(&self, algorithm: Algorithm, min: usize) -> Result<(), ConfigError> {
        match self.sizes.iter().find(|&&size| size < min) {
            Some(&size) => Err(ConfigError::SizeTooSmall {
                algorithm,
                size,
                min,
            }),
            None => Ok(()),
        }
    }
}
