//! Log sink implementations.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use super::{LogLevel, LogRecord};

/// Abstract sink for run-level progress records.
///
/// Implementations decide their own level gating and serialization; the
/// engine calls `write` unconditionally with the full record and leaves
/// filtering to the sink's configured level.
pub trait LogSink {
    fn write(&mut self, record: &LogRecord);

    /// Flush any buffered output. Called once at run end.
    fn flush(&mut self) {}
}

/// Writes human-readable lines to stdout, gated by `level`.
pub struct ConsoleSink {
    level: LogLevel,
}

impl ConsoleSink {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl LogSink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) {
        let record_level = parse_level(&record.level);
        if !self.level.admits(record_level) {
            return;
        }
        println!(
            "[{}] iter={} T={:.4} cur={:.4} best={:.4} reheats={} sinceImprovement={} {}",
            record.level,
            record.iter,
            record.temperature,
            record.current_fitness,
            record.best_fitness,
            record.reheats,
            record.since_improvement,
            record.msg,
        );
    }
}

/// Writes one JSON object per line to a file opened in append mode. The
/// file handle is acquired at construction and released on `Drop`, under
/// scoped-release semantics on every exit path (specification §5).
pub struct FileSink {
    level: LogLevel,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn new(path: &str, level: LogLevel) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            writer: BufWriter::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn write(&mut self, record: &LogRecord) {
        let record_level = parse_level(&record.level);
        if !self.level.admits(record_level) {
            return;
        }
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(self.writer, "{line}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Fans a record out to both a console and a file sink (`output = both`).
pub struct CompositeSink {
    sinks: Vec<Box<dyn LogSink>>,
}

impl CompositeSink {
    pub fn new(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for CompositeSink {
    fn write(&mut self, record: &LogRecord) {
        for sink in &mut self.sinks {
            sink.write(record);
        }
    }

    fn flush(&mut self) {
        for sink in &mut self.sinks {
            sink.flush();
        }
    }
}

fn parse_level(level: &str) -> LogLevel {
    match level {
        "error" => LogLevel::Error,
        "warn" => LogLevel::Warn,
        "info" => LogLevel::Info,
        "debug" => LogLevel::Debug,
        _ => LogLevel::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_sink_does_not_panic_on_any_level() {
        let mut sink = ConsoleSink::new(LogLevel::Debug);
        let record = LogRecord::new(LogLevel::Info, 10, 5.0, 1.0, 0.5, 0, 2, "progress");
        sink.write(&record);
    }

    #[test]
    fn file_sink_appends_json_lines() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("frostfire-test-{}.jsonl", std::process::id()));
        let path_str = path.to_str().unwrap().to_string();

        {
            let mut sink = FileSink::new(&path_str, LogLevel::Info).unwrap();
            let record = LogRecord::new(LogLevel::Info, 1, 10.0, 2.0, 1.0, 0, 0, "hello");
            sink.write(&record);
            sink.flush();
        }

        let contents = std::fs::read_to_string(&path_str).unwrap();
        assert!(contents.contains("\"iter\":1"));
        assert!(contents.contains("hello"));

        std::fs::remove_file(&path_str).ok();
    }
}
