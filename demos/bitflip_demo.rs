//! Worked example: the smallest possible state/constraint/generator wiring
//! — a single bit toggled until it satisfies a parity constraint.
//!
//! Not part of the crate's public contract; run with
//! `cargo run --example bitflip_demo`.

use frostfire::prelude::*;
use rand::RngCore;

struct Even;

impl Constraint<i64> for Even {
    fn name(&self) -> &str {
        "even"
    }
    fn class(&self) -> ConstraintClass {
        ConstraintClass::Hard
    }
    fn evaluate(&self, state: &i64) -> Result<f64, String> {
        Ok(if state % 2 == 0 { 1.0 } else { 0.0 })
    }
}

struct FlipBit;

impl MoveGenerator<i64> for FlipBit {
    fn name(&self) -> &str {
        "flip-bit"
    }
    fn generate(&self, state: &i64, _t: f64, _rng: &mut dyn RngCore) -> Result<i64, String> {
        Ok(1 - state)
    }
}

fn main() {
    let config = ConfigBuilder::new()
        .initial_temperature(5.0)
        .min_temperature(0.01)
        .cooling_rate(0.9)
        .max_iterations(100)
        .clone_state(|s: &i64| Ok(*s))
        .seed(1)
        .build()
        .expect("valid configuration");

    let constraints: Vec<Box<dyn Constraint<i64>>> = vec![Box::new(Even)];
    let generators: Vec<Box<dyn MoveGenerator<i64>>> = vec![Box::new(FlipBit)];

    let annealer = Annealer::new(constraints, generators, config);
    let solution = annealer.run(0);

    println!("best_state={} fitness={}", solution.best_state, solution.fitness);
}
