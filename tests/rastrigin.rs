//! Test for the Rastrigin function optimization using simulated annealing.
//!
//! The Rastrigin function is a non-convex function with many local minima
//! and a single global minimum of 0 at the origin. It is expressed here as
//! a single soft constraint whose score approaches 1.0 as the candidate
//! point approaches the origin.

use frostfire::prelude::*;
use rand::{Rng, RngCore};
use std::f64::consts::PI;

const SEED: u64 = 1337;
const EPSILON: f64 = 0.5;

#[derive(Clone)]
struct RastriginState {
    coords: Vec<f64>,
    range: (f64, f64),
}

impl RastriginState {
    fn new(dimensions: usize, range: (f64, f64), rng: &mut impl Rng) -> Self {
        let coords = (0..dimensions)
            .map(|_| rng.gen_range(-0.5..0.5))
            .collect();
        Self { coords, range }
    }

    fn raw_value(&self) -> f64 {
        let n = self.coords.len() as f64;
        let sum: f64 = self
            .coords
            .iter()
            .map(|&x| x * x - 10.0 * (2.0 * PI * x).cos())
            .sum();
        10.0 * n + sum
    }
}

/// Normalizes the unbounded Rastrigin value into a `[0, 1]` satisfaction
/// score via `1 / (1 + value)`, since constraints must score in `[0, 1]`.
struct NearOrigin;

impl Constraint<RastriginState> for NearOrigin {
    fn name(&self) -> &str {
        "near-origin"
    }
    fn class(&self) -> ConstraintClass {
        ConstraintClass::Soft
    }
    fn weight(&self) -> f64 {
        1.0
    }
    fn evaluate(&self, state: &RastriginState) -> Result<f64, String> {
        Ok(1.0 / (1.0 + state.raw_value()))
    }
}

struct Perturb;

impl MoveGenerator<RastriginState> for Perturb {
    fn name(&self) -> &str {
        "perturb"
    }
    fn generate(
        &self,
        state: &RastriginState,
        temperature: f64,
        rng: &mut dyn RngCore,
    ) -> Result<RastriginState, String> {
        let mut coords = state.coords.clone();
        let idx = (rng.next_u32() as usize) % coords.len();
        let scale = (temperature / 10.0).clamp(0.01, 1.0);
        let step = ((rng.next_u32() as f64 / u32::MAX as f64) - 0.5) * scale;
        coords[idx] = (coords[idx] + step).clamp(state.range.0, state.range.1);
        Ok(RastriginState { coords, range: state.range })
    }
}

fn run(dimensions: usize, seed: u64, max_iterations: u64) -> Solution<RastriginState> {
    let range = (-5.12, 5.12);
    let mut rng = seeded_rng(seed);
    let initial = RastriginState::new(dimensions, range, &mut rng);

    let constraints: Vec<Box<dyn Constraint<RastriginState>>> = vec![Box::new(NearOrigin)];
    let generators: Vec<Box<dyn MoveGenerator<RastriginState>>> = vec![Box::new(Perturb)];
    let config = ConfigBuilder::new()
        .initial_temperature(10.0)
        .min_temperature(0.001)
        .cooling_rate(0.997)
        .max_iterations(max_iterations)
        .clone_state(|s: &RastriginState| Ok(s.clone()))
        .reheating_threshold(500)
        .reheating_factor(1.5)
        .max_reheats(5)
        .seed(seed)
        .build()
        .expect("valid configuration");

    let annealer = Annealer::new(constraints, generators, config);
    annealer.run(initial)
}

#[test]
fn test_rastrigin_2d() {
    let solution = run(2, SEED, 50_000);
    let value = solution.best_state.raw_value();
    assert!(value < EPSILON, "got {value}, expected below {EPSILON}");
}

#[test]
fn test_rastrigin_5d() {
    let solution = run(5, SEED, 100_000);
    let value = solution.best_state.raw_value();
    // Higher dimensions have a harder landscape; allow looser tolerance.
    assert!(value < 3.0, "got {value}, expected a near-global minimum");
}
