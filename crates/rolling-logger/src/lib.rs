//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every line to a sink (the browser console in the app).
//!
//! Line format: `[HH:MM:SS.mmm] LEVEL target: message`

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Receives each formatted line
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

const MAX_MESSAGE_CHARS: usize = 2000;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize, sink: Sink) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink,
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        (self.sink)(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger once.
///
/// A second call is rejected rather than silently replacing the first.
pub fn init_logger(level: &str, capacity: usize, sink: Sink) -> Result<(), String> {
    let filter = parse_level(level)?;
    if LOGGER.get().is_some() {
        return Err("logger already initialized".to_string());
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(filter, capacity, sink));
    log::set_logger(logger).map_err(|e| format!("failed to install logger: {e}"))?;
    log::set_max_level(filter);
    log::info!("logger started: level={} capacity={}", filter, capacity);
    Ok(())
}

/// Lines held by the global logger; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        )),
    }
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    let single_line = message.replace(['\n', '\r'], " ");
    let mut body: String = single_line.chars().take(MAX_MESSAGE_CHARS).collect();
    if single_line.chars().count() > MAX_MESSAGE_CHARS {
        body.push_str("...");
    }
    format!("[{timestamp}] {level:<5} {target}: {body}")
}
