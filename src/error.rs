//! Error types for the frostfire annealing engine.

use thiserror::Error;

/// Errors surfaced by [`crate::core::config::ConfigBuilder::build`].
///
/// Configuration errors are always detected before the annealing loop
/// begins; the loop never starts on an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("initial temperature must be positive, got {0}")]
    NonPositiveInitialTemperature(f64),

    #[error("minimum temperature must be positive, got {0}")]
    NonPositiveMinTemperature(f64),

    #[error("minimum temperature ({min}) must be below initial temperature ({initial})")]
    MinTemperatureNotBelowInitial { min: f64, initial: f64 },

    #[error("cooling rate must be in (0, 1), got {0}")]
    CoolingRateOutOfRange(f64),

    #[error("hard constraint weight must be non-negative, got {0}")]
    NegativeHardWeight(f64),

    #[error("reheating factor must be >= 1.0, got {0}")]
    ReheatingFactorBelowOne(f64),

    #[error("maxIterations must be at least 1")]
    ZeroMaxIterations,

    #[error("cloneState callback is required")]
    MissingCloneState,

    #[error("log file path is required when logging output is file or both")]
    MissingLogFilePath,
}

/// Top-level error type returned by the annealer for the two failure kinds
/// that abort a run outright: invalid configuration and a fatal clone
/// failure. All other per-iteration failures described in the
/// specification are recovered locally and recorded in the returned
/// [`crate::core::solution::Solution`] instead of being surfaced here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealerError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("clone of state failed: {0}")]
    Clone(String),
}
