//! Fitness evaluation driven by pluggable constraints.
//!
//! Aggregates hard and soft constraint scores into a scalar cost and a
//! violation count, per specification §4.1.

use crate::core::constraint::{Constraint, ConstraintClass};
use log::{error, warn};

/// Outcome of scoring a single state against a constraint set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessReport {
    /// `hardViolationCount * hardWeight + softPenalty`. Lower is better.
    pub fitness: f64,
    /// Number of hard constraints scoring below 1.0.
    pub hard_violations: u64,
    /// Number of soft constraints scoring below 1.0.
    pub soft_violations: u64,
}

/// Clamps a raw constraint score into `[0, 1]`, logging anomalies.
///
/// An `Err` result, or a NaN/infinite score, is treated as `0.0`
/// (specification §4.1 edge cases, §7 kind 4) and logged at `error`; finite
/// out-of-range scores are clamped and logged at `warn` (specification §3
/// invariant).
fn clamp_score(constraint_name: &str, raw: Result<f64, String>) -> f64 {
    let raw = match raw {
        Ok(v) => v,
        Err(e) => {
            error!("constraint '{constraint_name}' failed: {e}; treating as 0.0");
            return 0.0;
        }
    };
    if raw.is_nan() || raw.is_infinite() {
        error!(
            "constraint '{constraint_name}' returned a non-finite score ({raw}); treating as 0.0"
        );
        return 0.0;
    }
    if !(0.0..=1.0).contains(&raw) {
        warn!("constraint '{constraint_name}' returned {raw}, outside [0, 1]; clamping");
        return raw.clamp(0.0, 1.0);
    }
    raw
}

/// Scores `state` against `constraints`, side-effect-free aside from the
/// clamp/anomaly logging above.
///
/// An empty constraint set yields `fitness = 0.0` (specification §4.1 edge
/// case).
pub fn evaluate<S>(state: &S, constraints: &[Box<dyn Constraint<S>>], hard_weight: f64) -> FitnessReport {
    let mut hard_violations = 0u64;
    let mut soft_penalty = 0.0;
    let mut soft_violations = 0u64;

    for constraint in constraints {
        let score = clamp_score(constraint.name(), constraint.evaluate(state));
        match constraint.class() {
            ConstraintClass::Hard => {
                if score < 1.0 {
                    hard_violations += 1;
                }
            }
            ConstraintClass::Soft => {
                if score < 1.0 {
                    soft_violations += 1;
                }
                soft_penalty += constraint.weight() * (1.0 - score);
            }
        }
    }

    FitnessReport {
        fitness: hard_violations as f64 * hard_weight + soft_penalty,
        hard_violations,
        soft_violations,
    }
}
