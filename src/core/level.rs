//! Severity levels and the dual name/rank representation

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered from NOTSET (0) to CRITICAL (50).
///
/// The numeric ranks are part of the public contract: callers may address a
/// level by rank instead of by name, and every canonical rank maps back to
/// exactly one canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Notset = 0,
    Debug = 10,
    Info = 20,
    Warn = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Notset,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    /// Canonical upper-case name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Notset => "NOTSET",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Numeric rank of this level.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Exact rank lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownLevelRank`] for any rank that is not one
    /// of the six canonical values.
    pub fn from_rank(rank: u8) -> Result<Self> {
        match rank {
            0 => Ok(Severity::Notset),
            10 => Ok(Severity::Debug),
            20 => Ok(Severity::Info),
            30 => Ok(Severity::Warn),
            40 => Ok(Severity::Error),
            50 => Ok(Severity::Critical),
            other => Err(LoggerError::UnknownLevelRank { rank: other }),
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Notset => White,
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::Critical => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NOTSET" => Ok(Severity::Notset),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(LoggerError::UnknownLevelName {
                name: s.to_string(),
            }),
        }
    }
}

/// A severity given either by name or by numeric rank.
///
/// Callers may address levels both ways; the spec is normalized exactly once,
/// at the API boundary, via [`LevelSpec::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Rank(u8),
    Name(String),
}

impl LevelSpec {
    /// Normalize to a canonical [`Severity`].
    ///
    /// # Errors
    ///
    /// [`LoggerError::UnknownLevelName`] for an unrecognized name,
    /// [`LoggerError::UnknownLevelRank`] for a non-canonical rank.
    pub fn resolve(&self) -> Result<Severity> {
        match self {
            LevelSpec::Name(name) => name.parse(),
            LevelSpec::Rank(rank) => Severity::from_rank(*rank),
        }
    }
}

impl From<Severity> for LevelSpec {
    fn from(level: Severity) -> Self {
        LevelSpec::Rank(level.rank())
    }
}

impl From<u8> for LevelSpec {
    fn from(rank: u8) -> Self {
        LevelSpec::Rank(rank)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}
