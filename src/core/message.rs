//! Log message input, literal or deferred
//!
//! A message can be a ready string, a structured value, or a deferred
//! producer. The producer is invoked only when the level gate passes, so
//! expensive message construction costs nothing on filtered calls.

use super::value::ArgValue;
use std::fmt;

/// Message passed to a log call.
pub enum LogMessage {
    /// A ready display string
    Literal(String),
    /// A structured value, rendered through [`ArgValue::render`]
    Value(ArgValue),
    /// A producer invoked only if the call clears the logger threshold
    Deferred(Box<dyn FnOnce() -> String + Send>),
}

impl LogMessage {
    /// Wrap a producer closure as a deferred message.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        LogMessage::Deferred(Box::new(producer))
    }

    /// Resolve to a display string, consuming the message. A deferred
    /// producer is invoked here.
    pub fn into_string(self) -> String {
        match self {
            LogMessage::Literal(s) => s,
            LogMessage::Value(v) => v.render(),
            LogMessage::Deferred(producer) => producer(),
        }
    }

    /// Resolve for record construction: returns the pass-through value handed
    /// back to the caller together with the display string. A deferred
    /// producer collapses to a literal holding its result.
    pub(crate) fn resolve(self) -> (LogMessage, String) {
        match self {
            LogMessage::Literal(s) => {
                let display = s.clone();
                (LogMessage::Literal(s), display)
            }
            LogMessage::Value(v) => {
                let display = v.render();
                (LogMessage::Value(v), display)
            }
            LogMessage::Deferred(producer) => {
                let display = producer();
                (LogMessage::Literal(display.clone()), display)
            }
        }
    }
}

impl fmt::Debug for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMessage::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            LogMessage::Value(v) => f.debug_tuple("Value").field(v).finish(),
            LogMessage::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Literal(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Literal(s)
    }
}

impl From<ArgValue> for LogMessage {
    fn from(value: ArgValue) -> Self {
        LogMessage::Value(value)
    }
}
