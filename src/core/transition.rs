//! Transition policies for simulated annealing.
//!
//! This module provides functions to determine whether a proposed state
//! transition should be accepted during the annealing process.

use rand::Rng;

/// The classic Metropolis-Hastings acceptance criterion for simulated annealing.
///
/// This function implements the standard acceptance probability function:
/// - If the new fitness is no worse (delta <= 0), accept it with probability 1
/// - If the new fitness is worse (delta > 0), accept it with probability exp(-delta/temperature)
///
/// This allows the algorithm to occasionally accept worse solutions, helping it
/// escape local minima. As the temperature decreases, the probability of accepting
/// worse solutions also decreases, allowing the algorithm to converge.
///
/// # Mathematical Background
///
/// The acceptance probability is given by:
///
/// P(accept) = min(1, exp(-delta/T))
///
/// where:
/// - delta is the fitness difference (new_fitness - current_fitness)
/// - T is the current temperature
///
/// # Parameters
///
/// * `delta`: The fitness difference (new_fitness - current_fitness)
/// * `temperature`: The current temperature in the annealing process
/// * `rng`: A random number generator
///
/// # Returns
///
/// `true` if the transition should be accepted, `false` otherwise.
///
/// # Examples
///
/// ```
/// use frostfire::core::transition::accept;
/// use frostfire::rng::seeded_rng;
///
/// let mut rng = seeded_rng(42);
///
/// // Always accept improvements, and ties.
/// assert!(accept(-10.0, 1.0, &mut rng));
/// assert!(accept(0.0, 1.0, &mut rng));
/// ```
pub fn accept(delta: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta <= 0.0 {
        true
    } else {
        rng.gen::<f64>() < (-delta / temperature).exp()
    }
}
