//! Named logger: gate once, fan out to handlers

use super::error::Result;
use super::handler::SharedHandler;
use super::level::{LevelSpec, Severity};
use super::message::LogMessage;
use super::record::Record;
use super::value::ArgValue;
use parking_lot::RwLock;

/// A named logger with a severity threshold and an ordered handler list.
///
/// Handlers are shared with the [`LoggerManager`](super::manager::LoggerManager)
/// that owns them; the logger only references them. All log calls return the
/// message they were given, so a logger is usable inline as a pass-through:
///
/// ```
/// use rotolog::Logger;
///
/// let logger = Logger::new("app");
/// let greeting = logger.info("hello", vec![]).unwrap().into_string();
/// assert_eq!(greeting, "hello");
/// ```
pub struct Logger {
    name: String,
    threshold: RwLock<Severity>,
    handlers: RwLock<Vec<SharedHandler>>,
}

impl Logger {
    /// Create a logger with threshold NOTSET and no handlers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: RwLock::new(Severity::Notset),
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Set the threshold from either a level name or a numeric rank.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownLevelName`/`UnknownLevelRank` on a non-canonical
    /// spec; the threshold is left unchanged in that case.
    pub fn set_threshold(&self, level: impl Into<LevelSpec>) -> Result<()> {
        let level = level.into().resolve()?;
        *self.threshold.write() = level;
        Ok(())
    }

    /// Append a handler to the fan-out list.
    pub fn add_handler(&self, handler: SharedHandler) {
        self.handlers.write().push(handler);
    }

    /// Replace the fan-out list. Order is significant: handlers receive each
    /// record in list order.
    pub fn set_handlers(&self, handlers: Vec<SharedHandler>) {
        *self.handlers.write() = handlers;
    }

    pub fn handlers(&self) -> Vec<SharedHandler> {
        self.handlers.read().clone()
    }

    /// Log a message at `level`.
    ///
    /// Below the threshold this returns the message untouched, without
    /// invoking a deferred producer and without any I/O. Otherwise the
    /// message resolves to its display string, a [`Record`] is built, and
    /// every attached handler receives it in attachment order. The first
    /// handler failure propagates: delivery failure is caller-visible.
    pub fn log(
        &self,
        level: Severity,
        message: impl Into<LogMessage>,
        args: Vec<ArgValue>,
    ) -> Result<LogMessage> {
        let message = message.into();
        if *self.threshold.read() > level {
            return Ok(message);
        }

        let (message, display) = message.resolve();
        let record = Record::new(level, display, args, self.name.clone());

        let handlers = self.handlers.read();
        for handler in handlers.iter() {
            handler.lock().handle(&record)?;
        }

        Ok(message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
        self.log(Severity::Debug, message, args)
    }

    #[inline]
    pub fn info(&self, message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
        self.log(Severity::Info, message, args)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
        self.log(Severity::Warn, message, args)
    }

    #[inline]
    pub fn error(&self, message: impl Into<LogMessage>, args: Vec<ArgValue>) -> Result<LogMessage> {
        self.log(Severity::Error, message, args)
    }

    #[inline]
    pub fn critical(
        &self,
        message: impl Into<LogMessage>,
        args: Vec<ArgValue>,
    ) -> Result<LogMessage> {
        self.log(Severity::Critical, message, args)
    }
}
