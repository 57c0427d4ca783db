//! Operator selection and per-generator statistics.
//!
//! Picks uniformly among the move generators applicable to the current
//! state and tracks attempt/accept/improvement counters, per specification
//! §4.2.

use crate::core::generator::MoveGenerator;
use rand::Rng;

/// Attempt/accept/improve counters for a single move generator.
#[derive(Clone, Debug, Default)]
pub struct OperatorStats {
    pub attempts: u64,
    pub accepted: u64,
    pub improvements: u64,
}

impl OperatorStats {
    /// `improvements / attempts`, or `0.0` when no attempts were made.
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.improvements as f64 / self.attempts as f64
        }
    }
}

/// Result of asking the selector for the next generator to apply.
pub enum SelectorOutcome {
    /// Index into the generator slice of the chosen generator.
    Chosen(usize),
    /// No generator's `can_apply` held for the current state; the loop
    /// should stop gracefully (specification §7, kind 2).
    NoApplicableGenerator,
}

/// Chooses uniformly among the generators whose `can_apply(state)` holds.
pub fn select<S>(
    generators: &[Box<dyn MoveGenerator<S>>],
    state: &S,
    rng: &mut impl Rng,
) -> SelectorOutcome {
    let applicable: Vec<usize> = generators
        .iter()
        .enumerate()
        .filter(|(_, g)| g.can_apply(state))
        .map(|(i, _)| i)
        .collect();

    if applicable.is_empty() {
        return SelectorOutcome::NoApplicableGenerator;
    }

    let pick = rng.gen_range(0..applicable.len());
    SelectorOutcome::Chosen(applicable[pick])
}
