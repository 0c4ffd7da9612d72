//! Error types for the logging system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity name with no canonical level
    #[error("unknown level name: '{name}'")]
    UnknownLevelName { name: String },

    /// Numeric rank that is not one of the canonical severity ranks
    #[error("unknown level rank: {rank}")]
    UnknownLevelRank { rank: u8 },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Exclusive-create open found leftover backup files
    #[error("cannot create '{path}' exclusively: backup '{backup}' already exists")]
    BackupCollision { path: String, backup: String },

    /// Logger configuration references a handler that was never registered
    #[error("logger '{logger}' references undefined handler '{handler}'")]
    MissingHandler { logger: String, handler: String },

    /// Write attempted on a handler whose file is no longer open
    #[error("handler for '{path}' has no open file")]
    HandlerClosed { path: String },

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a backup collision error
    pub fn backup_collision(path: impl Into<String>, backup: impl Into<String>) -> Self {
        LoggerError::BackupCollision {
            path: path.into(),
            backup: backup.into(),
        }
    }

    /// Create a missing handler error
    pub fn missing_handler(logger: impl Into<String>, handler: impl Into<String>) -> Self {
        LoggerError::MissingHandler {
            logger: logger.into(),
            handler: handler.into(),
        }
    }

    /// Create a closed handler error
    pub fn handler_closed(path: impl Into<String>) -> Self {
        LoggerError::HandlerClosed { path: path.into() }
    }
}
