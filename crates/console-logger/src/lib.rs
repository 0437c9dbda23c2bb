//! Console Logger
//!
//! A `log` facade backend for WASM frontends. Records are written to the
//! browser console at the matching level, and the most recent lines are
//! kept in a fixed-size buffer so they can be attached to bug reports.
//! On native targets (unit tests, tooling) records go to stderr instead.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of recent log lines kept in memory
const BUFFER_CAPACITY: usize = 200;

/// Log backend writing to the browser console
pub struct ConsoleLogger {
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    fn new() -> Self {
        Self {
            buffer: Mutex::new(VecDeque::with_capacity(BUFFER_CAPACITY)),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == BUFFER_CAPACITY {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }

    /// Most recent log lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        self.push(line.clone());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the console logger as the global `log` backend
///
/// # Errors
///
/// Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drops_oldest_beyond_capacity() {
        let logger = ConsoleLogger::new();
        for i in 0..BUFFER_CAPACITY + 5 {
            logger.push(format!("line {i}"));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), BUFFER_CAPACITY);
        assert_eq!(recent.first().map(String::as_str), Some("line 5"));
        assert_eq!(
            recent.last().map(String::as_str),
            Some(format!("line {}", BUFFER_CAPACITY + 4).as_str())
        );
    }

    #[test]
    fn log_formats_level_and_target() {
        log::set_max_level(LevelFilter::Info);
        let logger = ConsoleLogger::new();
        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Warn)
                .target("app")
                .build(),
        );

        assert_eq!(logger.recent(), vec!["[WARN] app: hello".to_string()]);
    }
}
