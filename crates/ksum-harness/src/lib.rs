//! Timing harness for the `ksum-core` algorithms.
//!
//! Generates seeded inputs, times each algorithm across a ladder of input
//! sizes, fits the timings to a power law and renders the result.

use std::{path::PathBuf, sync::LazyLock};

pub mod check;
pub mod config;
pub mod input;
pub mod regression;
pub mod report;
pub mod timing;

pub use config::{HarnessConfig, RunMode};

/// `.env` file picked up from the working directory or its parents, if any.
pub static ENV_GUARD: LazyLock<Option<PathBuf>> = LazyLock::new(|| dotenvy::dotenv().ok());

/// Initialise logging and load the `.env` file.
///
/// The `.env` file is loaded first so a `RUST_LOG` set there applies. With
/// `None` the level comes from `RUST_LOG`, defaulting to `info`.
pub fn setup(level: Option<log::LevelFilter>) {
    let env_file = ENV_GUARD.as_ref();

    let env = env_logger::Env::default().default_filter_or("info");
    if logger_builder(env, level).try_init().is_err() {
        log::debug!("Logger already initialised, keeping the existing one");
    }

    match env_file {
        Some(path) => log::debug!("Loaded environment from {}", path.display()),
        None => log::debug!("No .env file found"),
    }
}

/// Logger configured from `env`, with `level` overriding it when given.
fn logger_builder(
    env: env_logger::Env<'_>,
    level: Option<log::LevelFilter>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
}
