//! Console Logger
//!
//! A `log` backend for browser apps. Records are formatted with a local
//! timestamp, forwarded to the browser console (stderr on native targets)
//! and kept in a bounded ring buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of formatted lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger that writes to the console and remembers the last `capacity` lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut buf) = self.recent.lock() {
            while buf.len() >= self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

/// Format one record as `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
