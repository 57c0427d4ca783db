//! Main annealing engine implementation.
//!
//! This module drives the temperature schedule, invokes generators and the
//! evaluator, applies the Metropolis acceptance rule, and triggers
//! reheating on stagnation (specification §4.3).

use std::collections::HashMap;

use log::warn;

use crate::core::config::AnnealerConfig;
use crate::core::constraint::Constraint;
use crate::core::evaluator::evaluate;
use crate::core::generator::MoveGenerator;
use crate::core::selector::{select, OperatorStats, SelectorOutcome};
use crate::core::solution::{RunStatus, Solution, ViolationRecord};
use crate::core::transition;
use crate::error::AnnealerError;
use crate::logging::{CompositeSink, ConsoleSink, FileSink, LogLevel, LogRecord, LoggingOutput, LogSink};
use crate::rng::{entropy_seed, seeded_rng};

/// The simulated annealing engine. Holds the frozen constraint and
/// move-generator sets plus configuration for the duration of a run.
pub struct Annealer<S> {
    constraints: Vec<Box<dyn Constraint<S>>>,
    generators: Vec<Box<dyn MoveGenerator<S>>>,
    config: AnnealerConfig<S>,
}

impl<S> Annealer<S> {
    /// Builds an annealer from an already-validated configuration. Use
    /// [`crate::core::config::ConfigBuilder::build`] to obtain a
    /// validated [`AnnealerConfig`]; configuration errors are surfaced
    /// there, before the loop ever begins (specification §7, kind 1).
    pub fn new(
        constraints: Vec<Box<dyn Constraint<S>>>,
        generators: Vec<Box<dyn MoveGenerator<S>>>,
        config: AnnealerConfig<S>,
    ) -> Self {
        Self {
            constraints,
            generators,
            config,
        }
    }

    /// Runs the annealing process to completion (or cancellation, or a
    /// fatal clone error) starting from `initial_state`.
    pub fn run(&self, initial_state: S) -> Solution<S> {
        run_annealer(initial_state, &self.constraints, &self.generators, &self.config)
    }
}

fn build_sink<S>(config: &AnnealerConfig<S>) -> Option<Box<dyn LogSink>> {
    if !config.logging.enabled || config.logging.level == LogLevel::None {
        return None;
    }
    let level = config.logging.level;
    match config.logging.output {
        LoggingOutput::Console => Some(Box::new(ConsoleSink::new(level))),
        LoggingOutput::File => {
            let path = config.logging.file_path.as_deref()?;
            match FileSink::new(path, level) {
                Ok(sink) => Some(Box::new(sink)),
                Err(e) => {
                    warn!("failed to open log file '{path}': {e}; logging disabled");
                    None
                }
            }
        }
        LoggingOutput::Both => {
            let path = config.logging.file_path.as_deref()?;
            let console: Box<dyn LogSink> = Box::new(ConsoleSink::new(level));
            match FileSink::new(path, level) {
                Ok(file) => {
                    let file: Box<dyn LogSink> = Box::new(file);
                    Some(Box::new(CompositeSink::new(vec![console, file])))
                }
                Err(e) => {
                    warn!("failed to open log file '{path}': {e}; logging to console only");
                    Some(console)
                }
            }
        }
    }
}

/// Scores `best` a final time and collects per-constraint violation
/// messages and counts, per specification §4.4.
fn assemble_violations<S>(best: &S, constraints: &[Box<dyn Constraint<S>>]) -> Vec<ViolationRecord> {
    constraints
        .iter()
        .map(|c| {
            let score = c.evaluate(best).unwrap_or(0.0).clamp(0.0, 1.0);
            ViolationRecord {
                constraint_name: c.name().to_string(),
                class: c.class(),
                score,
                messages: c.get_violations(best),
            }
        })
        .collect()
}

/// Runs the simulated annealing loop over `initial_state`.
///
/// This is the free-function form of [`Annealer::run`], exposed directly
/// for callers that do not need to hold onto an `Annealer` instance
/// between runs.
pub fn run_annealer<S>(
    initial_state: S,
    constraints: &[Box<dyn Constraint<S>>],
    generators: &[Box<dyn MoveGenerator<S>>],
    config: &AnnealerConfig<S>,
) -> Solution<S> {
    let seed = config.seed.unwrap_or_else(entropy_seed);
    let mut rng = seeded_rng(seed);
    let mut sink = build_sink(config);

    let mut current = initial_state;
    let mut current_report = evaluate(&current, constraints, config.hard_constraint_weight);
    let mut current_fitness = current_report.fitness;

    let mut operator_stats: HashMap<String, OperatorStats> = generators
        .iter()
        .map(|g| (g.name().to_string(), OperatorStats::default()))
        .collect();

    let mut best = match (config.clone_state)(&current) {
        Ok(s) => s,
        Err(e) => {
            log::error!("initial clone of state failed: {e}");
            return Solution {
                best_state: current,
                fitness: current_report.fitness,
                hard_violations: current_report.hard_violations,
                soft_violations: current_report.soft_violations,
                iterations: 0,
                reheats: 0,
                final_temperature: config.initial_temperature,
                violations: Vec::new(),
                operator_stats,
                status: RunStatus::Error(AnnealerError::Clone(e).to_string()),
                seed,
            };
        }
    };
    let mut best_fitness = current_fitness;

    let mut temperature = config.initial_temperature;
    let mut iterations: u64 = 0;
    let mut reheats: u64 = 0;
    let mut since_improvement: u64 = 0;
    let mut status = RunStatus::Completed;

    'outer: loop {
        if temperature < config.min_temperature || iterations >= config.max_iterations {
            break;
        }
        if let Some(cancel) = &config.cancellation {
            if cancel() {
                status = RunStatus::Cancelled;
                break;
            }
        }

        let idx = match select(generators, &current, &mut rng) {
            SelectorOutcome::Chosen(idx) => idx,
            SelectorOutcome::NoApplicableGenerator => {
                warn!("no applicable move generator for the current state; stopping early");
                break;
            }
        };
        let generator = &generators[idx];
        let gen_name = generator.name().to_string();
        operator_stats.entry(gen_name.clone()).or_default().attempts += 1;

        let candidate = match generator.generate(&current, temperature, &mut rng) {
            Ok(s) => s,
            Err(e) => {
                log::error!("generator '{gen_name}' failed: {e}; skipping iteration");
                iterations += 1;
                continue;
            }
        };

        let candidate_report = evaluate(&candidate, constraints, config.hard_constraint_weight);
        let delta = candidate_report.fitness - current_fitness;
        let accepted = transition::accept(delta, temperature, &mut rng);

        if accepted {
            current = candidate;
            current_fitness = candidate_report.fitness;
            current_report = candidate_report;
            operator_stats.entry(gen_name.clone()).or_default().accepted += 1;

            if current_fitness < best_fitness {
                best = match (config.clone_state)(&current) {
                    Ok(s) => s,
                    Err(e) => {
                        log::error!("clone of best state failed: {e}");
                        status = RunStatus::Error(AnnealerError::Clone(e).to_string());
                        break 'outer;
                    }
                };
                best_fitness = current_fitness;
                since_improvement = 0;
                operator_stats.entry(gen_name.clone()).or_default().improvements += 1;
            } else {
                since_improvement += 1;
            }
        } else {
            since_improvement += 1;
        }

        iterations += 1;

        let reheated = match config.reheating_threshold {
            Some(threshold) if since_improvement >= threshold && reheats < config.max_reheats => {
                temperature *= config.reheating_factor;
                reheats += 1;
                since_improvement = 0;
                true
            }
            _ => {
                temperature *= config.cooling_rate;
                false
            }
        };

        if let Some(sink) = sink.as_mut() {
            let interval = config.logging.log_interval.max(1);
            if iterations % interval == 0 {
                let msg = if reheated { "reheated" } else { "progress" };
                sink.write(&LogRecord::new(
                    LogLevel::Info,
                    iterations,
                    temperature,
                    current_fitness,
                    best_fitness,
                    reheats,
                    since_improvement,
                    msg,
                ));
            }
            if config.logging.level == LogLevel::Debug {
                let msg = if accepted { "accepted" } else { "rejected" };
                sink.write(&LogRecord::new(
                    LogLevel::Debug,
                    iterations,
                    temperature,
                    current_fitness,
                    best_fitness,
                    reheats,
                    since_improvement,
                    format!("{gen_name}: {msg}"),
                ));
            }
        }
    }

    if let Some(sink) = sink.as_mut() {
        sink.flush();
    }

    let final_report = evaluate(&best, constraints, config.hard_constraint_weight);
    let violations = assemble_violations(&best, constraints);

    Solution {
        best_state: best,
        fitness: final_report.fitness,
        hard_violations: final_report.hard_violations,
        soft_violations: final_report.soft_violations,
        iterations,
        reheats,
        final_temperature: temperature,
        violations,
        operator_stats,
        status,
        seed,
    }
}
