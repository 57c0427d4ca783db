//! Configuration for a simulated annealing run.
//!
//! Configuration and the constraint/generator sets are frozen for the
//! duration of a run; see [`crate::core::annealer::Annealer`].

use crate::error::{AnnealerError, ConfigError};
use crate::logging::{LogLevel, LoggingOutput};

/// Logging cadence and sink selection for a run.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Whether progress logging is active at all.
    pub enabled: bool,
    /// Minimum level emitted. `None` disables logging regardless of `enabled`.
    pub level: LogLevel,
    /// Emit a progress record every `log_interval` iterations.
    pub log_interval: u64,
    /// Where progress records are written.
    pub output: LoggingOutput,
    /// Required when `output` is `File` or `Both`.
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: LogLevel::Info,
            log_interval: 100,
            output: LoggingOutput::Console,
            file_path: None,
        }
    }
}

/// Tunables governing a single annealing run. Construct via
/// [`ConfigBuilder`]; all bounds are validated at `build()` time so the loop
/// never starts on an invalid configuration (specification §7, kind 1).
pub struct AnnealerConfig<S> {
    pub(crate) initial_temperature: f64,
    pub(crate) min_temperature: f64,
    pub(crate) cooling_rate: f64,
    pub(crate) max_iterations: u64,
    pub(crate) hard_constraint_weight: f64,
    pub(crate) clone_state: Box<dyn Fn(&S) -> Result<S, String>>,
    pub(crate) reheating_threshold: Option<u64>,
    pub(crate) reheating_factor: f64,
    pub(crate) max_reheats: u64,
    pub(crate) logging: LoggingConfig,
    pub(crate) seed: Option<u64>,
    pub(crate) cancellation: Option<Box<dyn Fn() -> bool>>,
}

/// Builder for [`AnnealerConfig`]. Mirrors the defaults given in the
/// specification's Configuration section.
pub struct ConfigBuilder<S> {
    initial_temperature: f64,
    min_temperature: f64,
    cooling_rate: f64,
    max_iterations: u64,
    hard_constraint_weight: f64,
    clone_state: Option<Box<dyn Fn(&S) -> Result<S, String>>>,
    reheating_threshold: Option<u64>,
    reheating_factor: f64,
    max_reheats: u64,
    logging: LoggingConfig,
    seed: Option<u64>,
    cancellation: Option<Box<dyn Fn() -> bool>>,
}

impl<S> Default for ConfigBuilder<S> {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.01,
            cooling_rate: 0.995,
            max_iterations: 50_000,
            hard_constraint_weight: 10_000.0,
            clone_state: None,
            reheating_threshold: None,
            reheating_factor: 2.0,
            max_reheats: 3,
            logging: LoggingConfig::default(),
            seed: None,
            cancellation: None,
        }
    }
}

impl<S> ConfigBuilder<S> {
    /// Creates a builder pre-filled with the specification's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_temperature(mut self, value: f64) -> Self {
        self.initial_temperature = value;
        self
    }

    pub fn min_temperature(mut self, value: f64) -> Self {
        self.min_temperature = value;
        self
    }

    pub fn cooling_rate(mut self, value: f64) -> Self {
        self.cooling_rate = value;
        self
    }

    pub fn max_iterations(mut self, value: u64) -> Self {
        self.max_iterations = value;
        self
    }

    pub fn hard_constraint_weight(mut self, value: f64) -> Self {
        self.hard_constraint_weight = value;
        self
    }

    /// Required. Deep-copy semantics; returns `Err` only on an unrecoverable
    /// clone failure, which aborts the run (specification §7, kind 5).
    pub fn clone_state<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> Result<S, String> + 'static,
    {
        self.clone_state = Some(Box::new(f));
        self
    }

    pub fn reheating_threshold(mut self, value: u64) -> Self {
        self.reheating_threshold = Some(value);
        self
    }

    pub fn reheating_factor(mut self, value: f64) -> Self {
        self.reheating_factor = value;
        self
    }

    pub fn max_reheats(mut self, value: u64) -> Self {
        self.max_reheats = value;
        self
    }

    pub fn logging(mut self, value: LoggingConfig) -> Self {
        self.logging = value;
        self
    }

    /// Sets a deterministic seed. If unset, the run draws from a
    /// system-entropy source and records the drawn seed on the result.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Registers an optional cancellation-token poll, checked once per
    /// iteration (specification §5).
    pub fn cancellation<F>(mut self, f: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.cancellation = Some(Box::new(f));
        self
    }

    /// Validates all bounds and produces a frozen [`AnnealerConfig`].
    ///
    /// Every validation failure is surfaced as `AnnealerError::Configuration`
    /// (specification §7, kind 1), so the loop never begins on an invalid
    /// configuration.
    pub fn build(self) -> Result<AnnealerConfig<S>, AnnealerError> {
        if self.initial_temperature <= 0.0 {
            return Err(AnnealerError::Configuration(
                ConfigError::NonPositiveInitialTemperature(self.initial_temperature),
            ));
        }
        if self.min_temperature <= 0.0 {
            return Err(AnnealerError::Configuration(
                ConfigError::NonPositiveMinTemperature(self.min_temperature),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(AnnealerError::Configuration(
                ConfigError::MinTemperatureNotBelowInitial {
                    min: self.min_temperature,
                    initial: self.initial_temperature,
                },
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(AnnealerError::Configuration(
                ConfigError::CoolingRateOutOfRange(self.cooling_rate),
            ));
        }
        if self.max_iterations < 1 {
            return Err(AnnealerError::Configuration(ConfigError::ZeroMaxIterations));
        }
        if self.hard_constraint_weight < 0.0 {
            return Err(AnnealerError::Configuration(
                ConfigError::NegativeHardWeight(self.hard_constraint_weight),
            ));
        }
        if self.reheating_factor < 1.0 {
            return Err(AnnealerError::Configuration(
                ConfigError::ReheatingFactorBelowOne(self.reheating_factor),
            ));
        }
        let clone_state = self.clone_state.ok_or(ConfigError::MissingCloneState)?;
        if matches!(
            self.logging.output,
            LoggingOutput::File | LoggingOutput::Both
        ) && self.logging.file_path.is_none()
        {
            return Err(AnnealerError::Configuration(
                ConfigError::MissingLogFilePath,
            ));
        }

        Ok(AnnealerConfig {
            initial_temperature: self.initial_temperature,
            min_temperature: self.min_temperature,
            cooling_rate: self.cooling_rate,
            max_iterations: self.max_iterations,
            hard_constraint_weight: self.hard_constraint_weight,
            clone_state,
            reheating_threshold: self.reheating_threshold,
            reheating_factor: self.reheating_factor,
            max_reheats: self.max_reheats,
            logging: self.logging,
            seed: self.seed,
            cancellation: self.cancellation,
        })
    }
}
