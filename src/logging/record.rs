//! The logging schema emitted by a run, one JSON object per line when a
//! file sink is used (specification §6).

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use super::LogLevel;

/// One progress or diagnostic line.
#[derive(Clone, Debug, Serialize)]
pub struct LogRecord {
    pub ts: u128,
    pub level: String,
    pub iter: u64,
    #[serde(rename = "T")]
    pub temperature: f64,
    #[serde(rename = "curFitness")]
    pub current_fitness: f64,
    #[serde(rename = "bestFitness")]
    pub best_fitness: f64,
    pub reheats: u64,
    #[serde(rename = "sinceImprovement")]
    pub since_improvement: u64,
    pub msg: String,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        iter: u64,
        temperature: f64,
        current_fitness: f64,
        best_fitness: f64,
        reheats: u64,
        since_improvement: u64,
        msg: impl Into<String>,
    ) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let level = match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::None => "none",
        }
        .to_string();

        Self {
            ts,
            level,
            iter,
            temperature,
            current_fitness,
            best_fitness,
            reheats,
            since_improvement,
            msg: msg.into(),
        }
    }
}
