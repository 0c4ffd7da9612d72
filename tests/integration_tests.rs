//! Integration tests for the logging system
//!
//! These tests verify:
//! - Logger threshold gating and handler fan-out
//! - Lazy message evaluation
//! - Declarative configuration through the manager
//! - Handler error propagation
//! - Log injection prevention end to end

use parking_lot::Mutex;
use rotolog::{
    shared, ArgValue, Handler, LevelSpec, LogConfig, LogMessage, Logger, LoggerConfig,
    LoggerError, LoggerManager, Record, Result, RotatingFileHandler, RotationConfig, Severity,
    SharedHandler,
};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Collects every emitted line in memory; the test double counterpart of the
/// real sinks.
struct CollectingHandler {
    threshold: Severity,
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingHandler {
    fn pair() -> (SharedHandler, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let handler = shared(CollectingHandler {
            threshold: Severity::Notset,
            lines: Arc::clone(&lines),
        });
        (handler, lines)
    }
}

impl Handler for CollectingHandler {
    fn name(&self) -> &str {
        "collecting"
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn set_threshold(&mut self, level: LevelSpec) -> Result<()> {
        self.threshold = level.resolve()?;
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        rotolog::default_format(record)
    }

    fn emit(&mut self, line: &str, _level: Severity) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

struct FailingHandler;

impl Handler for FailingHandler {
    fn name(&self) -> &str {
        "failing"
    }

    fn threshold(&self) -> Severity {
        Severity::Notset
    }

    fn set_threshold(&mut self, _level: LevelSpec) -> Result<()> {
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        record.message.clone()
    }

    fn emit(&mut self, _line: &str, _level: Severity) -> Result<()> {
        Err(LoggerError::handler_closed("failing-sink"))
    }
}

#[test]
fn test_threshold_filters_below_and_delivers_above() {
    let (handler, lines) = CollectingHandler::pair();
    let logger = Logger::new("app");
    logger.add_handler(handler);
    logger.set_threshold("warn").expect("canonical level name");

    logger.debug("too quiet", vec![]).unwrap();
    logger.info("still too quiet", vec![]).unwrap();
    logger.warn("heard", vec![]).unwrap();
    logger.critical("loud", vec![]).unwrap();

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[WARN][app] heard"));
    assert!(lines[1].contains("[CRITICAL][app] loud"));
}

#[test]
fn test_deferred_message_never_evaluated_when_filtered() {
    let logger = Logger::new("app");
    logger.set_threshold(Severity::Error).unwrap();

    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let returned = logger
        .info(
            LogMessage::deferred(move || {
                flag.store(true, Ordering::SeqCst);
                "expensive computation".to_string()
            }),
            vec![],
        )
        .unwrap();

    assert!(!invoked.load(Ordering::SeqCst));
    // The producer comes back un-invoked and still usable.
    assert!(matches!(returned, LogMessage::Deferred(_)));
    assert_eq!(returned.into_string(), "expensive computation");
    assert!(invoked.load(Ordering::SeqCst));
}

#[test]
fn test_deferred_message_evaluated_once_when_delivered() {
    let (handler, lines) = CollectingHandler::pair();
    let logger = Logger::new("app");
    logger.add_handler(handler);

    let returned = logger
        .info(LogMessage::deferred(|| "produced".to_string()), vec![])
        .unwrap();

    assert_eq!(returned.into_string(), "produced");
    assert_eq!(lines.lock().len(), 1);
    assert!(lines.lock()[0].contains("produced"));
}

#[test]
fn test_pass_through_message() {
    let logger = Logger::new("app");
    let message = logger.info("keep me", vec![]).unwrap();
    assert_eq!(message.into_string(), "keep me");
}

#[test]
fn test_args_rendered_into_line() {
    let (handler, lines) = CollectingHandler::pair();
    let logger = Logger::new("app");
    logger.add_handler(handler);

    logger
        .info(
            "request done",
            vec![
                ArgValue::Int(200),
                ArgValue::Map(vec![("path".to_string(), ArgValue::Str("/health".into()))]),
            ],
        )
        .unwrap();

    let lines = lines.lock();
    assert!(lines[0].contains(r#"request done 200 {"path": "/health"}"#));
}

#[test]
fn test_structured_message_value() {
    let (handler, lines) = CollectingHandler::pair();
    let logger = Logger::new("app");
    logger.add_handler(handler);

    let message = ArgValue::Map(vec![
        ("event".to_string(), ArgValue::Str("start".into())),
        ("pid".to_string(), ArgValue::Int(4242)),
    ]);
    logger.info(LogMessage::from(message), vec![]).unwrap();

    assert!(lines.lock()[0].contains(r#"{"event": "start", "pid": 4242}"#));
}

#[test]
fn test_handler_failure_propagates() {
    let (collecting, lines) = CollectingHandler::pair();
    let logger = Logger::new("app");
    logger.add_handler(collecting);
    logger.add_handler(shared(FailingHandler));

    let err = logger.info("will fail downstream", vec![]).unwrap_err();
    assert!(matches!(err, LoggerError::HandlerClosed { .. }));
    // The first handler already received the record: fan-out is ordered and
    // the failure is not masked.
    assert_eq!(lines.lock().len(), 1);
}

#[test]
fn test_manager_configure_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");

    let manager = LoggerManager::new();
    let file_handler = RotatingFileHandler::with_config(
        &log_file,
        RotationConfig::new().with_max_bytes(4096).with_max_backups(2),
    )
    .expect("Failed to create handler");

    manager
        .configure(
            LogConfig::new()
                .handler("file", file_handler)
                .logger("app", LoggerConfig::new("info").handler("file")),
        )
        .unwrap();

    let logger = manager.get_logger("app");
    logger.debug("filtered out", vec![]).unwrap();
    logger.info("written out", vec![]).unwrap();

    manager.shutdown().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[INFO][app] written out"));
    assert!(!content.contains("filtered out"));
}

#[test]
fn test_manager_missing_handler_reference() {
    let manager = LoggerManager::new();
    let err = manager
        .configure(LogConfig::new().logger("app", LoggerConfig::new("info").handler("ghost")))
        .unwrap_err();

    assert!(matches!(
        err,
        LoggerError::MissingHandler { ref logger, ref handler }
            if logger == "app" && handler == "ghost"
    ));
}

#[test]
fn test_manager_rejects_unknown_level_before_applying() {
    let (handler, _lines) = CollectingHandler::pair();
    let manager = LoggerManager::new();

    let err = manager
        .configure(
            LogConfig::new()
                .shared_handler("mem", handler)
                .logger("app", LoggerConfig::new("loudest").handler("mem")),
        )
        .unwrap_err();
    assert!(matches!(err, LoggerError::UnknownLevelName { .. }));

    // The failed call registered nothing.
    assert!(manager.get_handler("mem").is_none());
}

#[test]
fn test_same_handler_shared_by_two_loggers() {
    let (handler, lines) = CollectingHandler::pair();
    let manager = LoggerManager::new();

    manager
        .configure(
            LogConfig::new()
                .shared_handler("mem", handler)
                .logger("alpha", LoggerConfig::new("info").handler("mem"))
                .logger("beta", LoggerConfig::new("info").handler("mem")),
        )
        .unwrap();

    manager.get_logger("alpha").info("from alpha", vec![]).unwrap();
    manager.get_logger("beta").info("from beta", vec![]).unwrap();

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[alpha]"));
    assert!(lines[1].contains("[beta]"));
}

#[test]
fn test_global_free_functions() {
    let (handler, lines) = CollectingHandler::pair();
    rotolog::setup(
        LogConfig::new()
            .shared_handler("default-sink", handler)
            .logger(
                rotolog::DEFAULT_LOGGER,
                LoggerConfig::new("debug").handler("default-sink"),
            ),
    )
    .unwrap();

    rotolog::info("via free function", vec![]).unwrap();
    rotolog::error("also via free function", vec![ArgValue::Bool(true)]).unwrap();

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[INFO][default] via free function"));
    assert!(lines[1].contains("[ERROR][default] also via free function true"));
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("injection.log");

    let logger = Logger::new("audit");
    logger.add_handler(shared(
        RotatingFileHandler::with_config(
            &log_file,
            RotationConfig::new().with_max_bytes(4096),
        )
        .unwrap(),
    ));

    let malicious = "User login\nERROR [2024-10-17] Fake error injected";
    logger.info(malicious, vec![]).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
    assert!(content.contains("\\n"));
}

#[test]
fn test_default_line_format() {
    let (handler, lines) = CollectingHandler::pair();
    let logger = Logger::new("fmt");
    logger.add_handler(handler);

    logger.warn("formatted", vec![]).unwrap();

    let lines = lines.lock();
    let line = &lines[0];
    // [<ISO-8601 timestamp>][<LEVEL>][<logger>] <message>
    assert!(line.starts_with('['));
    assert!(line.contains("Z][WARN][fmt] formatted"));
    let timestamp = &line[1..line.find(']').unwrap()];
    assert!(timestamp.contains('T'));
    assert!(timestamp.ends_with('Z'));
}
