//! Convenient re-exports of commonly used types and functions.
//!
//! This module re-exports the most commonly used items from the frostfire
//! crate, allowing callers to import them all with a single
//! `use frostfire::prelude::*` statement.

pub use crate::core::annealer::{run_annealer, Annealer};
pub use crate::core::config::{AnnealerConfig, ConfigBuilder, LoggingConfig};
pub use crate::core::constraint::{Constraint, ConstraintClass};
pub use crate::core::evaluator::{evaluate, FitnessReport};
pub use crate::core::generator::MoveGenerator;
pub use crate::core::selector::{OperatorStats, SelectorOutcome};
pub use crate::core::solution::{RunStatus, Solution, ViolationRecord};
pub use crate::core::transition::accept;
pub use crate::error::{AnnealerError, ConfigError};
pub use crate::logging::{LogLevel, LoggingOutput};
pub use crate::rng::{entropy_seed, seeded_rng};

// Re-export commonly used external types
pub use rand::RngCore;
