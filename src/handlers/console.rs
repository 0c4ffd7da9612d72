//! Console handler implementation

use crate::core::handler::{default_format, Formatter, Handler};
use crate::core::{LevelSpec, Record, Result, Severity};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Wrap a formatted line in the ANSI color for `level`.
///
/// The whole line is colored after formatting; NOTSET stays plain.
pub fn colorize(line: &str, level: Severity) -> String {
    match level {
        Severity::Notset => line.to_string(),
        Severity::Critical => line.color(level.color_code()).bold().to_string(),
        _ => line.color(level.color_code()).to_string(),
    }
}

/// Handler writing formatted lines to the process's standard output.
pub struct ConsoleHandler {
    threshold: Severity,
    formatter: Formatter,
    use_colors: bool,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self {
            threshold: Severity::Notset,
            formatter: Arc::new(default_format),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, level: Severity) -> Self {
        self.threshold = level;
        self
    }

    /// Replace the line formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn name(&self) -> &str {
        "console"
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn set_threshold(&mut self, level: LevelSpec) -> Result<()> {
        self.threshold = level.resolve()?;
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        (self.formatter)(record)
    }

    fn emit(&mut self, line: &str, level: Severity) -> Result<()> {
        let rendered = if self.use_colors {
            colorize(line, level)
        } else {
            line.to_string()
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        Ok(())
    }
}
