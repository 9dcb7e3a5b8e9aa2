//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each one to the browser console (stderr off-WASM).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded history of formatted lines
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    fn format(record: &Record) -> String {
        format!(
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
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
        let line = Self::format(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Only the first call takes effect.
pub fn init_logger(capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest() {
        let logger = RollingLogger::new(2, LevelFilter::Info);
        logger.push("a".into());
        logger.push("b".into());
        logger.push("c".into());
        assert_eq!(logger.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(8, LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("store")
                .args(format_args!("save failed"))
                .build(),
        );
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR store: save failed"));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        logger.push("x".into());
        assert_eq!(logger.lines().len(), 1);
    }
}
