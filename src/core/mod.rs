//! Core components of the frostfire simulated annealing engine.
//!
//! This module contains the fundamental abstractions and implementation
//! that form the backbone of the frostfire library:
//!
//! - `annealer`: the main optimization engine (C6)
//! - `config`: tunables and their validation (C3)
//! - `constraint`: the hard/soft scored-predicate contract (C1)
//! - `evaluator`: fitness aggregation over a constraint set (C4)
//! - `generator`: the neighbor-producing move contract (C2)
//! - `selector`: uniform operator choice plus statistics (C5)
//! - `solution`: the result record returned by a run (C7)
//! - `transition`: the Metropolis acceptance rule

pub mod annealer;
pub mod config;
pub mod constraint;
pub mod evaluator;
pub mod generator;
pub mod selector;
pub mod solution;
pub mod transition;
