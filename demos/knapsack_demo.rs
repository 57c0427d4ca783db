//! Worked example: wiring a 0/1 knapsack problem into the generic engine.
//!
//! Not part of the crate's public contract; run with
//! `cargo run --example knapsack_demo`.

use frostfire::prelude::*;
use rand::{Rng, RngCore};

#[derive(Clone)]
struct Item {
    weight: f64,
    value: f64,
}

#[derive(Clone)]
struct Problem {
    items: Vec<Item>,
    capacity: f64,
}

#[derive(Clone)]
struct Selection {
    chosen: Vec<bool>,
}

struct WithinCapacity(Problem);

impl Constraint<Selection> for WithinCapacity {
    fn name(&self) -> &str {
        "within-capacity"
    }
    fn class(&self) -> ConstraintClass {
        ConstraintClass::Hard
    }
    fn evaluate(&self, state: &Selection) -> Result<f64, String> {
        let total_weight: f64 = state
            .chosen
            .iter()
            .zip(self.0.items.iter())
            .filter(|&(&c, _)| c)
            .map(|(_, i)| i.weight)
            .sum();
        Ok(if total_weight <= self.0.capacity { 1.0 } else { 0.0 })
    }
}

struct MaximizeValue(Problem);

impl Constraint<Selection> for MaximizeValue {
    fn name(&self) -> &str {
        "maximize-value"
    }
    fn class(&self) -> ConstraintClass {
        ConstraintClass::Soft
    }
    fn weight(&self) -> f64 {
        50.0
    }
    fn evaluate(&self, state: &Selection) -> Result<f64, String> {
        let max: f64 = self.0.items.iter().map(|i| i.value).sum();
        let total: f64 = state
            .chosen
            .iter()
            .zip(self.0.items.iter())
            .filter(|&(&c, _)| c)
            .map(|(_, i)| i.value)
            .sum();
        Ok(if max == 0.0 { 1.0 } else { total / max })
    }
}

struct ToggleItem;

impl MoveGenerator<Selection> for ToggleItem {
    fn name(&self) -> &str {
        "toggle-item"
    }
    fn generate(&self, state: &Selection, _t: f64, rng: &mut dyn RngCore) -> Result<Selection, String> {
        let mut chosen = state.chosen.clone();
        let idx = (rng.next_u32() as usize) % chosen.len();
        chosen[idx] = !chosen[idx];
        Ok(Selection { chosen })
    }
}

fn main() {
    let mut rng = seeded_rng(2024);
    let items: Vec<Item> = (0..20)
        .map(|_| Item {
            weight: rng.gen_range(1.0..20.0),
            value: rng.gen_range(1.0..50.0),
        })
        .collect();
    let problem = Problem { items, capacity: 60.0 };
    let initial = Selection { chosen: vec![false; problem.items.len()] };

    let constraints: Vec<Box<dyn Constraint<Selection>>> = vec![
        Box::new(WithinCapacity(problem.clone())),
        Box::new(MaximizeValue(problem)),
    ];
    let generators: Vec<Box<dyn MoveGenerator<Selection>>> = vec![Box::new(ToggleItem)];

    let config = ConfigBuilder::new()
        .initial_temperature(50.0)
        .min_temperature(0.01)
        .cooling_rate(0.995)
        .max_iterations(20_000)
        .hard_constraint_weight(10_000.0)
        .clone_state(|s: &Selection| Ok(s.clone()))
        .seed(2024)
        .build()
        .expect("valid configuration");

    let annealer = Annealer::new(constraints, generators, config);
    let solution = annealer.run(initial);

    println!(
        "fitness={:.4} hard_violations={} iterations={} reheats={}",
        solution.fitness, solution.hard_violations, solution.iterations, solution.reheats
    );
}
