//! Move generator contract for simulated annealing.
//!
//! A `MoveGenerator` proposes a candidate neighbor of the current state. The
//! annealer loop (see [`crate::core::annealer`]) picks among the generators
//! whose `can_apply` holds (see [`crate::core::selector`]) and scores the
//! result with the configured constraints.

use rand::RngCore;

/// The `MoveGenerator` trait defines an applicability test and a
/// neighbor-producing transform.
///
/// # Examples
///
/// ```
/// use frostfire::prelude::*;
/// use rand::RngCore;
///
/// struct FlipBit;
///
/// impl MoveGenerator<i64> for FlipBit {
///     fn name(&self) -> &str {
///         "flip-bit"
///     }
///
///     fn generate(&self, state: &i64, _temperature: f64, _rng: &mut dyn RngCore) -> Result<i64, String> {
///         Ok(1 - state)
///     }
/// }
/// ```
pub trait MoveGenerator<S> {
    /// A human-readable identifier used for operator statistics.
    fn name(&self) -> &str;

    /// Whether this generator can propose a move from `state`. Defaults to
    /// always applicable.
    fn can_apply(&self, _state: &S) -> bool {
        true
    }

    /// Produces a **new** state derived from `state`; must not mutate the
    /// input. `temperature` is the current annealing temperature and may be
    /// used to scale move magnitude; implementations are free to ignore it.
    /// An `Err` marks the iteration as skipped (specification §7, kind 3):
    /// the attempt is still counted, but no accept/improve statistic is
    /// recorded and the iteration does not advance the loop's counters.
    fn generate(&self, state: &S, temperature: f64, rng: &mut dyn RngCore) -> Result<S, String>;
}
