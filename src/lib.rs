//! # Frostfire
//!
//! A modular, mathematically rigorous, performant, reusable simulated
//! annealing optimization engine.
//!
//! ## Overview
//!
//! Simulated annealing is a probabilistic technique for approximating the
//! global optimum of a given function. It is often used when the search
//! space is discrete and finding an approximate global optimum is more
//! important than finding a precise local optimum.
//!
//! This crate separates the annealing engine from any particular problem
//! domain. Callers supply:
//!
//! - A state type `S` of their own choosing — the engine places no trait
//!   bounds on it.
//! - One or more [`Constraint`]s, each classified `Hard` (a feasibility
//!   requirement) or `Soft` (a weighted preference).
//! - One or more [`MoveGenerator`]s that propose neighboring states.
//! - A `clone_state` closure, since the engine cannot assume `S: Clone`.
//!
//! The engine drives a geometric-cooling Metropolis search with reheating
//! on stagnation, and returns a [`Solution`] carrying the best state found,
//! its fitness breakdown, per-operator statistics, and a record of why the
//! run stopped.
//!
//! ## Example
//!
//! ```rust
//! use frostfire::prelude::*;
//! use rand::RngCore;
//!
//! #[derive(Clone)]
//! struct Parity(i64);
//!
//! struct Even;
//! impl Constraint<Parity> for Even {
//!     fn name(&self) -> &str {
//!         "even"
//!     }
//!     fn class(&self) -> ConstraintClass {
//!         ConstraintClass::Hard
//!     }
//!     fn evaluate(&self, state: &Parity) -> Result<f64, String> {
//!         Ok(if state.0 % 2 == 0 { 1.0 } else { 0.0 })
//!     }
//! }
//!
//! struct FlipBit;
//! impl MoveGenerator<Parity> for FlipBit {
//!     fn name(&self) -> &str {
//!         "flip-bit"
//!     }
//!     fn generate(&self, state: &Parity, _t: f64, _rng: &mut dyn RngCore) -> Result<Parity, String> {
//!         Ok(Parity(1 - state.0))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new()
//!     .initial_temperature(10.0)
//!     .min_temperature(0.01)
//!     .cooling_rate(0.9)
//!     .max_iterations(1000)
//!     .clone_state(|s: &Parity| Ok(s.clone()))
//!     .seed(42)
//!     .build()?;
//!
//! let annealer = Annealer::new(vec![Box::new(Even)], vec![Box::new(FlipBit)], config);
//! let solution = annealer.run(Parity(0));
//! assert_eq!(solution.hard_violations, 0);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod rng;
pub mod utils;

pub use crate::core::annealer::{run_annealer, Annealer};
pub use crate::core::config::{AnnealerConfig, ConfigBuilder, LoggingConfig};
pub use crate::core::constraint::{Constraint, ConstraintClass};
pub use crate::core::evaluator::{evaluate, FitnessReport};
pub use crate::core::generator::MoveGenerator;
pub use crate::core::selector::OperatorStats;
pub use crate::core::solution::{RunStatus, Solution, ViolationRecord};
pub use crate::core::transition;
pub use crate::error::{AnnealerError, ConfigError};
pub use crate::logging::{LogLevel, LoggingOutput};
pub use crate::rng::{entropy_seed, seeded_rng};
