//! Random number generation utilities for simulated annealing.
//!
//! This module provides tools for creating deterministic random number generators
//! that ensure reproducibility in simulated annealing runs.

mod seeded_rng;

pub use seeded_rng::{entropy_seed, seeded_rng};
