//! Log record structure

use super::level::Severity;
use super::value::ArgValue;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One immutable log event.
///
/// The timestamp is wall-clock at construction time; handlers that emit later
/// still format the original instant.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub level: Severity,
    pub message: String,
    pub args: Vec<ArgValue>,
    pub logger_name: String,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: Severity,
        message: String,
        args: Vec<ArgValue>,
        logger_name: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            args,
            logger_name: logger_name.into(),
            timestamp: Utc::now(),
        }
    }
}
