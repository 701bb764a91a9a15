/// glforge - global logger registry
///
/// Shader compilation itself is context-bound and single-threaded, but the
/// logger is process-wide so backends (driver debug callbacks in particular)
/// can reach it from wherever the driver calls back.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Entry point for logging configuration and failure reporting
///
/// # Example
///
/// ```no_run
/// use glforge::glforge::{Forge, log::{Logger, LogEntry}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Forge::set_logger(FileLogger);
/// ```
pub struct Forge;

impl Forge {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(new_logger: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(new_logger);
        }
    }

    /// Reset logger to `DefaultLogger::default()`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log a message without file:line (used by forge_info!, forge_warn!, ...)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line (used by forge_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }

    /// Render a failure record through the current logger
    ///
    /// The compiler never reports its own failures; callers decide whether a
    /// returned [`Error`] is worth logging, and this is the way to do it.
    pub fn report(source: &str, error: &Error) {
        Self::log(error.severity().log_severity(), source, error.to_string());
    }
}
