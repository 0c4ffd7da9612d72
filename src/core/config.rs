//! Declarative configuration for the logger manager

use super::handler::{shared, Handler, SharedHandler};
use super::level::LevelSpec;
use serde::{Deserialize, Serialize};

/// Settings for one named logger: a threshold and the names of the handlers
/// it fans out to, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub level: LevelSpec,
    pub handlers: Vec<String>,
}

impl LoggerConfig {
    pub fn new(level: impl Into<LevelSpec>) -> Self {
        Self {
            level: level.into(),
            handlers: Vec::new(),
        }
    }

    /// Reference a handler by its registered name.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn handler(mut self, name: impl Into<String>) -> Self {
        self.handlers.push(name.into());
        self
    }
}

/// One `configure` call's worth of handlers and loggers.
///
/// Entries keep insertion order; loggers attach their handlers in the order
/// the names are listed.
///
/// ```
/// use rotolog::{ConsoleHandler, LogConfig, LoggerConfig};
///
/// let config = LogConfig::new()
///     .handler("console", ConsoleHandler::new())
///     .logger("app", LoggerConfig::new("info").handler("console"));
/// ```
#[derive(Default)]
pub struct LogConfig {
    pub(crate) handlers: Vec<(String, SharedHandler)>,
    pub(crate) loggers: Vec<(String, LoggerConfig)>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler instance under a name.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn handler<H: Handler + 'static>(self, name: impl Into<String>, handler: H) -> Self {
        self.shared_handler(name, shared(handler))
    }

    /// Register an already-shared handler under a name.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn shared_handler(mut self, name: impl Into<String>, handler: SharedHandler) -> Self {
        self.handlers.push((name.into(), handler));
        self
    }

    /// Configure a named logger.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn logger(mut self, name: impl Into<String>, config: LoggerConfig) -> Self {
        self.loggers.push((name.into(), config));
        self
    }
}
