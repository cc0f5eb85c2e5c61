//! Rolling Logger
//!
//! `log` backend for browser front-ends. Records go to the browser console
//! (stderr on native targets) and the most recent ones are kept in a
//! fixed-size circular buffer so the UI can show them next to an error.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// A formatted log record kept in the ring buffer
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    /// Single line form used for console output and the UI
    pub fn line(&self) -> String {
        format!(
            "[{}] {:<5} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}

/// Fixed-capacity buffer that drops the oldest record when full
#[derive(Debug)]
pub struct RingBuffer {
    capacity: usize,
    records: VecDeque<LogRecord>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Last `n` records, oldest first
    pub fn latest(&self, n: usize) -> Vec<LogRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).cloned().collect()
    }

    /// Last `n` records at `level` or more severe, oldest first
    pub fn latest_at(&self, level: Level, n: usize) -> Vec<LogRecord> {
        let matching: Vec<&LogRecord> = self.records.iter().filter(|r| r.level <= level).collect();
        let skip = matching.len().saturating_sub(n);
        matching.into_iter().skip(skip).cloned().collect()
    }
}

struct RollingLogger {
    app_name: String,
    buffer: Mutex<RingBuffer>,
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogRecord {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };

        write_console(&self.app_name, &entry);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the logger as the global `log` backend.
///
/// Fails if a logger (this one or another) is already installed.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger {
        app_name: app_name.to_string(),
        buffer: Mutex::new(RingBuffer::new(capacity)),
    });
    log::set_logger(logger)?;
    log::set_max_level(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}

/// Most recent `n` records, oldest first. Empty when the logger is not installed.
pub fn recent_records(n: usize) -> Vec<LogRecord> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.latest(n)))
        .unwrap_or_default()
}

/// Most recent `n` warning/error records, oldest first
pub fn recent_problems(n: usize) -> Vec<LogRecord> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.latest_at(Level::Warn, n)))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(app_name: &str, entry: &LogRecord) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(&format!("{} {}", app_name, entry.line()));
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(app_name: &str, entry: &LogRecord) {
    eprintln!("{} {}", app_name, entry.line());
}
