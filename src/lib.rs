//! # Rotolog
//!
//! A structured logging library with named loggers, pluggable handlers, and
//! size-based file rotation.
//!
//! ## Features
//!
//! - **Named Loggers**: A process-wide registry hands out loggers by name
//! - **Pluggable Handlers**: Console and rotating-file sinks behind one trait
//! - **File Rotation**: Size-gated rotation with numbered backup retention
//! - **Lazy Messages**: Deferred message producers are skipped when filtered
//!
//! ## Example
//!
//! ```
//! use rotolog::{ConsoleHandler, LogConfig, LoggerConfig, LoggerManager};
//!
//! let manager = LoggerManager::new();
//! manager
//!     .configure(
//!         LogConfig::new()
//!             .handler("console", ConsoleHandler::with_colors(false))
//!             .logger("app", LoggerConfig::new("info").handler("console")),
//!     )
//!     .unwrap();
//!
//! let logger = manager.get_logger("app");
//! logger.info("service ready", vec![]).unwrap();
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        default_format, shared, ArgValue, Formatter, Handler, LevelSpec, LogConfig, LogMessage,
        LoggerConfig, LoggerError, LoggerManager, Logger, Record, Result, SharedHandler, Severity,
        TimestampFormat,
    };
    pub use crate::handlers::{ConsoleHandler, OpenMode, RotatingFileHandler, RotationConfig};
}

pub use core::{
    default_format, shared, ArgValue, Formatter, Handler, LevelSpec, LogConfig, LogMessage,
    LoggerConfig, LoggerError, LoggerManager, Logger, Record, Result, SharedHandler, Severity,
    TimestampFormat,
};
pub use handlers::{ConsoleHandler, OpenMode, RotatingFileHandler, RotationConfig};

use std::sync::Arc;

/// Name of the logger the crate-level shorthand functions write to.
pub const DEFAULT_LOGGER: &str = "default";

/// Get or create a logger in the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    LoggerManager::global().get_logger(name)
}

/// Apply a configuration to the process-wide registry.
///
/// # Errors
///
/// See [`LoggerManager::configure`].
pub fn setup(config: LogConfig) -> Result<()> {
    LoggerManager::global().configure(config)
}

/// Log at DEBUG on the `"default"` logger.
pub fn debug(message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
    get_logger(DEFAULT_LOGGER).debug(message, args)
}

/// Log at INFO on the `"default"` logger.
pub fn info(message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
    get_logger(DEFAULT_LOGGER).info(message, args)
}

/// Log at WARN on the `"default"` logger.
pub fn warn(message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
    get_logger(DEFAULT_LOGGER).warn(message, args)
}

/// Log at ERROR on the `"default"` logger.
pub fn error(message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
    get_logger(DEFAULT_LOGGER).error(message, args)
}

/// Log at CRITICAL on the `"default"` logger.
pub fn critical(message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
    get_logger(DEFAULT_LOGGER).critical(message, args)
}
