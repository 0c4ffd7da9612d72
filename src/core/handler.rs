//! Handler trait for log output destinations

use super::error::Result;
use super::level::{LevelSpec, Severity};
use super::record::Record;
use super::timestamp::TimestampFormat;
use parking_lot::Mutex;
use std::sync::Arc;

/// Formatter hook: turns a record into the line a handler emits.
pub type Formatter = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// A handler shared between the manager and any loggers referencing it.
pub type SharedHandler = Arc<Mutex<dyn Handler>>;

/// Wrap a handler for shared ownership.
pub fn shared<H: Handler + 'static>(handler: H) -> SharedHandler {
    Arc::new(Mutex::new(handler))
}

/// Default line format: `[<ISO-8601 timestamp>][<LEVEL>][<logger>] <message>`,
/// with rendered arguments appended space-separated when present.
pub fn default_format(record: &Record) -> String {
    let timestamp = TimestampFormat::Iso8601.format(&record.timestamp);
    let mut line = format!(
        "[{}][{}][{}] {}",
        timestamp, record.level, record.logger_name, record.message
    );
    for arg in &record.args {
        line.push(' ');
        line.push_str(&arg.render());
    }
    line
}

/// Output destination for formatted records.
///
/// `handle` gates on the handler's own threshold, formats, and emits; the
/// variants only supply `emit` and their state. Delivery errors propagate to
/// the logging call site.
pub trait Handler: Send {
    fn name(&self) -> &str;

    fn threshold(&self) -> Severity;

    /// Update the threshold from either a level name or a numeric rank.
    fn set_threshold(&mut self, level: LevelSpec) -> Result<()>;

    fn format(&self, record: &Record) -> String;

    /// Write one formatted line to the sink.
    fn emit(&mut self, line: &str, level: Severity) -> Result<()>;

    fn handle(&mut self, record: &Record) -> Result<()> {
        if record.level < self.threshold() {
            return Ok(());
        }
        let line = self.format(record);
        self.emit(&line, record.level)
    }

    /// Release any owned resources. Must be idempotent.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
