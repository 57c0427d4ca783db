//! Constraint contract for simulated annealing.
//!
//! A `Constraint` scores a state in `[0, 1]` and is classified as either
//! `Hard` (a feasibility requirement) or `Soft` (a weighted preference). The
//! evaluator (see [`crate::core::evaluator`]) aggregates both classes into a
//! single scalar fitness.

/// Classifies a constraint as a feasibility requirement or a preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintClass {
    /// A violation is prohibited. Hard violations are counted, not weighted
    /// per-instance, so the fitness landscape has a clean feasibility cliff.
    Hard,
    /// A preference whose violation is penalized proportionally to `weight`.
    Soft,
}

/// The `Constraint` trait defines a named, scored predicate over a state.
///
/// # Examples
///
/// ```
/// use frostfire::prelude::*;
///
/// struct EvenConstraint;
///
/// impl Constraint<i64> for EvenConstraint {
///     fn name(&self) -> &str {
///         "even"
///     }
///
///     fn class(&self) -> ConstraintClass {
///         ConstraintClass::Hard
///     }
///
///     fn evaluate(&self, state: &i64) -> Result<f64, String> {
///         Ok(if state % 2 == 0 { 1.0 } else { 0.0 })
///     }
/// }
/// ```
pub trait Constraint<S> {
    /// A human-readable identifier. Unique per run is recommended, not
    /// required.
    fn name(&self) -> &str;

    /// Whether this constraint is a feasibility requirement or a preference.
    fn class(&self) -> ConstraintClass;

    /// The weight applied to the soft penalty of this constraint. Ignored
    /// when `class()` is `Hard` (retained on the contract for symmetry, per
    /// the open question this engine resolves in favor of ignoring it).
    fn weight(&self) -> f64 {
        0.0
    }

    /// Scores `state` in `[0, 1]`, where `1.0` means fully satisfied and
    /// `0.0` means maximally violated. Must be deterministic for a given
    /// state. Values observed outside `[0, 1]` are clamped by the evaluator
    /// and logged as a warning; NaN or infinite values are treated as `0.0`
    /// and logged as an error. An `Err` is likewise treated as a `0.0` score
    /// and logged at `error`, without aborting the run.
    fn evaluate(&self, state: &S) -> Result<f64, String>;

    /// Returns a short human-readable explanation of the first violation
    /// found, or `None` if the constraint is fully satisfied.
    fn describe(&self, _state: &S) -> Option<String> {
        None
    }

    /// Returns the complete list of violation messages for `state`. Called
    /// only on demand, during final result assembly or debug logging.
    fn get_violations(&self, _state: &S) -> Vec<String> {
        Vec::new()
    }
}
