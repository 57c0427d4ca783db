//! Result assembly for a completed (or cancelled/errored) annealing run.

use crate::core::constraint::ConstraintClass;
use crate::core::selector::OperatorStats;
use std::collections::HashMap;

/// Why the run stopped.
#[derive(Clone, Debug, PartialEq)]
pub enum RunStatus {
    /// The loop terminated via temperature or iteration bound, or because no
    /// generator was applicable.
    Completed,
    /// The cancellation hook returned `true` at the start of an iteration.
    Cancelled,
    /// A fatal clone failure aborted the run; the message is diagnostic.
    Error(String),
}

/// A single constraint's violation detail against the best state found.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolationRecord {
    pub constraint_name: String,
    pub class: ConstraintClass,
    pub score: f64,
    pub messages: Vec<String>,
}

/// The record returned by a completed, cancelled, or errored annealing run.
#[derive(Clone, Debug)]
pub struct Solution<S> {
    pub best_state: S,
    pub fitness: f64,
    pub hard_violations: u64,
    pub soft_violations: u64,
    pub iterations: u64,
    pub reheats: u64,
    pub final_temperature: f64,
    pub violations: Vec<ViolationRecord>,
    pub operator_stats: HashMap<String, OperatorStats>,
    pub status: RunStatus,
    /// The seed used for this run, whether supplied by the caller or drawn
    /// from system entropy.
    pub seed: u64,
}
