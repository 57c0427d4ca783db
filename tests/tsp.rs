//! Test for the Traveling Salesman Problem (TSP) using simulated annealing.
//!
//! Verifies convergence to within a small multiple of a known-optimal tour
//! on a tiny symmetric instance, and a meaningful improvement on larger
//! random instances. Tour length is expressed as a single soft constraint
//! normalized against a rough upper bound on tour length.

use frostfire::prelude::*;
use rand::{Rng, RngCore};
use std::fmt;

const SEED: u64 = 42;

#[derive(Clone)]
struct TspProblem {
    cities: Vec<(f64, f64)>,
    optimal_distance: Option<f64>,
}

impl TspProblem {
    fn random(num_cities: usize, rng: &mut impl Rng) -> Self {
        let cities = (0..num_cities)
            .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect();
        Self { cities, optimal_distance: None }
    }

    fn with_known_optimal() -> Self {
        let cities = vec![(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)];
        Self { cities, optimal_distance: Some(20.0) }
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        let (x1, y1) = self.cities[a];
        let (x2, y2) = self.cities[b];
        ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
    }

    fn tour_distance(&self, tour: &[usize]) -> f64 {
        (0..tour.len())
            .map(|i| self.distance(tour[i], tour[(i + 1) % tour.len()]))
            .sum()
    }

    /// A loose upper bound used only to normalize distance into `[0, 1]`.
    fn worst_case_bound(&self) -> f64 {
        let diag = 100.0 * (2.0f64).sqrt();
        diag * self.cities.len() as f64
    }
}

#[derive(Clone)]
struct TspState {
    tour: Vec<usize>,
}

impl fmt::Debug for TspState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour: {:?}", self.tour)
    }
}

impl TspState {
    fn random(num_cities: usize, rng: &mut impl Rng) -> Self {
        let mut tour: Vec<usize> = (0..num_cities).collect();
        for i in (1..num_cities).rev() {
            let j = rng.gen_range(0..=i);
            tour.swap(i, j);
        }
        Self { tour }
    }
}

struct ShortTour(TspProblem);

impl Constraint<TspState> for ShortTour {
    fn name(&self) -> &str {
        "short-tour"
    }
    fn class(&self) -> ConstraintClass {
        ConstraintClass::Soft
    }
    fn weight(&self) -> f64 {
        1.0
    }
    fn evaluate(&self, state: &TspState) -> Result<f64, String> {
        let bound = self.0.worst_case_bound();
        let distance = self.0.tour_distance(&state.tour);
        Ok((1.0 - distance / bound).clamp(0.0, 1.0))
    }
}

struct SwapCities;

impl MoveGenerator<TspState> for SwapCities {
    fn name(&self) -> &str {
        "swap-cities"
    }
    fn generate(
        &self,
        state: &TspState,
        _temperature: f64,
        rng: &mut dyn RngCore,
    ) -> Result<TspState, String> {
        let mut tour = state.tour.clone();
        let n = tour.len();
        let idx1 = (rng.next_u32() as usize) % n;
        let idx2 = (rng.next_u32() as usize) % n;
        tour.swap(idx1, idx2);
        Ok(TspState { tour })
    }
}

fn run(problem: TspProblem, initial: TspState, max_iterations: u64, seed: u64) -> Solution<TspState> {
    let bound = problem.worst_case_bound();
    let constraints: Vec<Box<dyn Constraint<TspState>>> = vec![Box::new(ShortTour(problem))];
    let generators: Vec<Box<dyn MoveGenerator<TspState>>> = vec![Box::new(SwapCities)];
    let config = ConfigBuilder::new()
        .initial_temperature(bound * 0.05)
        .min_temperature(0.01)
        .cooling_rate(0.995)
        .max_iterations(max_iterations)
        .clone_state(|s: &TspState| Ok(s.clone()))
        .seed(seed)
        .build()
        .expect("valid configuration");

    let annealer = Annealer::new(constraints, generators, config);
    annealer.run(initial)
}

#[test]
fn test_tsp_small_known_optimal() {
    let problem = TspProblem::with_known_optimal();
    let mut rng = seeded_rng(SEED);
    let initial = TspState::random(problem.cities.len(), &mut rng);
    let optimal_distance = problem.optimal_distance.unwrap();

    let solution = run(problem.clone(), initial, 10_000, SEED);
    let best_distance = problem.tour_distance(&solution.best_state.tour);
    let ratio = best_distance / optimal_distance;

    assert!(ratio <= 1.2, "ratio {ratio} is not within 1.2x of optimal");
}

#[test]
fn test_tsp_medium() {
    let mut rng = seeded_rng(SEED);
    let num_cities = 20;
    let problem = TspProblem::random(num_cities, &mut rng);
    let initial = TspState::random(num_cities, &mut rng);
    let initial_distance = problem.tour_distance(&initial.tour);

    let solution = run(problem.clone(), initial, 20_000, SEED);
    let best_distance = problem.tour_distance(&solution.best_state.tour);

    assert!(
        best_distance < 0.5 * initial_distance,
        "solution did not improve significantly: {best_distance} vs {initial_distance}"
    );
}
