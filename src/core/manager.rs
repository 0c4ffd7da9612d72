//! Process-wide registry of loggers and handlers

use super::config::LogConfig;
use super::error::{LoggerError, Result};
use super::handler::SharedHandler;
use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<LoggerManager> = OnceLock::new();

/// Registry mapping logger names to loggers and handler names to handlers.
///
/// The process-wide instance lives behind [`LoggerManager::global`], its
/// single initialization point; standalone instances keep tests and embedded
/// uses isolated. Configuration is expected to happen once at startup
/// (single-writer, many-reader); readers and `configure` are each internally
/// consistent but concurrent `configure` calls are not coordinated beyond the
/// map locks.
pub struct LoggerManager {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    handlers: RwLock<HashMap<String, SharedHandler>>,
}

impl LoggerManager {
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide manager, created on first use.
    pub fn global() -> &'static LoggerManager {
        GLOBAL.get_or_init(LoggerManager::new)
    }

    /// Get or create the logger registered under `name`.
    ///
    /// A created logger starts with threshold NOTSET and no handlers.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }
        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    pub fn get_handler(&self, name: &str) -> Option<SharedHandler> {
        self.handlers.read().get(name).map(Arc::clone)
    }

    /// Apply a declarative configuration, replacing or adding entries.
    ///
    /// Every logger's level spec and handler references are validated first —
    /// references resolve against handlers in this call plus handlers already
    /// registered — so a failing call leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// [`LoggerError::MissingHandler`] for an unresolved handler reference,
    /// `UnknownLevelName`/`UnknownLevelRank` for a bad level spec.
    pub fn configure(&self, config: LogConfig) -> Result<()> {
        {
            let registered = self.handlers.read();
            for (logger_name, logger_cfg) in &config.loggers {
                logger_cfg.level.resolve()?;
                for handler_name in &logger_cfg.handlers {
                    let in_call = config
                        .handlers
                        .iter()
                        .any(|(name, _)| name == handler_name);
                    if !in_call && !registered.contains_key(handler_name) {
                        return Err(LoggerError::missing_handler(logger_name, handler_name));
                    }
                }
            }
        }

        {
            let mut registered = self.handlers.write();
            for (name, handler) in config.handlers {
                registered.insert(name, handler);
            }
        }

        for (logger_name, logger_cfg) in config.loggers {
            let logger = self.get_logger(&logger_name);
            logger.set_threshold(logger_cfg.level)?;

            let mut resolved = Vec::with_capacity(logger_cfg.handlers.len());
            for handler_name in &logger_cfg.handlers {
                let handler = self
                    .get_handler(handler_name)
                    .ok_or_else(|| LoggerError::missing_handler(&logger_name, handler_name))?;
                resolved.push(handler);
            }
            logger.set_handlers(resolved);
        }

        Ok(())
    }

    /// Close every registered handler. Each close is idempotent; the first
    /// failure propagates.
    pub fn shutdown(&self) -> Result<()> {
        let handlers = self.handlers.read();
        for handler in handlers.values() {
            handler.lock().close()?;
        }
        Ok(())
    }
}

impl Default for LoggerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LoggerConfig;
    use crate::core::level::Severity;
    use crate::handlers::ConsoleHandler;

    #[test]
    fn test_get_logger_idempotent() {
        let manager = LoggerManager::new();
        let first = manager.get_logger("app");
        let second = manager.get_logger("app");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_created_logger_defaults() {
        let manager = LoggerManager::new();
        let logger = manager.get_logger("fresh");
        assert_eq!(logger.threshold(), Severity::Notset);
        assert!(logger.handlers().is_empty());
    }

    #[test]
    fn test_configure_missing_handler() {
        let manager = LoggerManager::new();
        let config = LogConfig::new()
            .logger("app", LoggerConfig::new("info").handler("nowhere"));

        let err = manager.configure(config).unwrap_err();
        assert!(matches!(err, LoggerError::MissingHandler { .. }));
        // Nothing was applied.
        assert_eq!(manager.get_logger("app").threshold(), Severity::Notset);
    }

    #[test]
    fn test_configure_attaches_handlers() {
        let manager = LoggerManager::new();
        let config = LogConfig::new()
            .handler("console", ConsoleHandler::with_colors(false))
            .logger("app", LoggerConfig::new("warn").handler("console"));

        manager.configure(config).unwrap();

        let logger = manager.get_logger("app");
        assert_eq!(logger.threshold(), Severity::Warn);
        assert_eq!(logger.handlers().len(), 1);
        assert!(manager.get_handler("console").is_some());
    }

    #[test]
    fn test_configure_resolves_previously_registered() {
        let manager = LoggerManager::new();
        manager
            .configure(LogConfig::new().handler("console", ConsoleHandler::with_colors(false)))
            .unwrap();

        // Second call references the handler registered by the first.
        manager
            .configure(LogConfig::new().logger("app", LoggerConfig::new("debug").handler("console")))
            .unwrap();

        assert_eq!(manager.get_logger("app").handlers().len(), 1);
    }

    #[test]
    fn test_reconfigure_replaces() {
        let manager = LoggerManager::new();
        manager
            .configure(
                LogConfig::new()
                    .handler("console", ConsoleHandler::with_colors(false))
                    .logger("app", LoggerConfig::new("debug").handler("console")),
            )
            .unwrap();

        manager
            .configure(LogConfig::new().logger("app", LoggerConfig::new("critical")))
            .unwrap();

        let logger = manager.get_logger("app");
        assert_eq!(logger.threshold(), Severity::Critical);
        assert!(logger.handlers().is_empty());
    }

    #[test]
    fn test_shutdown_idempotent() {
        let manager = LoggerManager::new();
        manager
            .configure(LogConfig::new().handler("console", ConsoleHandler::with_colors(false)))
            .unwrap();

        manager.shutdown().unwrap();
        manager.shutdown().unwrap();
    }
}
