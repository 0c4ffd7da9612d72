//! Rotating file handler with size-based rotation and numbered backups
//!
//! The handler owns one open file and a running byte counter. When the next
//! write would push the file past `max_bytes`, backups shift one slot up
//! (`app.log` → `app.log.1` → … → `app.log.N`, oldest discarded) and the
//! primary file is reopened fresh.

use crate::core::error::{LoggerError, Result};
use crate::core::handler::{default_format, Formatter, Handler};
use crate::core::{LevelSpec, Record, Severity};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How the primary log file is opened at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Open or create; existing content is kept and appended to.
    #[default]
    Append,
    /// Open or create; existing content and stale backups are discarded.
    Truncate,
    /// The file must not exist yet; leftover backups fail construction.
    ExclusiveCreate,
}

/// Configuration for a rotating file handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Size threshold in bytes; a write that would exceed it rotates first
    pub max_bytes: u64,
    /// Number of numbered backup files kept after rotation
    pub max_backups: usize,
    /// Open mode for the primary file
    pub mode: OpenMode,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024, // 10 MiB
            max_backups: 5,
            mode: OpenMode::default(),
        }
    }
}

impl RotationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Handler appending formatted lines to a file, rotating it through numbered
/// backups once a write would cross the size threshold.
///
/// `path.1` is always the most recent backup and `path.N` the oldest; nothing
/// beyond `path.max_backups` survives a rotation.
///
/// # Examples
///
/// ```no_run
/// use rotolog::{OpenMode, RotatingFileHandler, RotationConfig};
///
/// let config = RotationConfig::new()
///     .with_max_bytes(50 * 1024 * 1024)
///     .with_max_backups(7)
///     .with_mode(OpenMode::Append);
/// let handler = RotatingFileHandler::with_config("/var/log/app.log", config).unwrap();
/// ```
pub struct RotatingFileHandler {
    path: PathBuf,
    config: RotationConfig,
    file: Option<File>,
    current_size: u64,
    threshold: Severity,
    formatter: Formatter,
}

impl std::fmt::Debug for RotatingFileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileHandler")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("file", &self.file)
            .field("current_size", &self.current_size)
            .field("threshold", &self.threshold)
            .field("formatter", &"<formatter>")
            .finish()
    }
}

impl RotatingFileHandler {
    /// Create a handler with the default configuration (10 MiB, 5 backups,
    /// append mode).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, RotationConfig::default())
    }

    /// Create a handler with a custom configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `max_bytes` or `max_backups` is zero (no
    /// file is opened in that case); `BackupCollision` when exclusive-create
    /// finds leftover backups; otherwise the underlying open error.
    pub fn with_config<P: AsRef<Path>>(path: P, config: RotationConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if config.max_bytes < 1 {
            return Err(LoggerError::config(
                "RotatingFileHandler",
                "max_bytes must be at least 1",
            ));
        }
        if config.max_backups < 1 {
            return Err(LoggerError::config(
                "RotatingFileHandler",
                "max_backups must be at least 1",
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "creating log directory",
                        parent.display().to_string(),
                        e,
                    )
                })?;
            }
        }

        let mut options = OpenOptions::new();
        match config.mode {
            OpenMode::Append => options.create(true).append(true),
            OpenMode::Truncate => options.create(true).write(true).truncate(true),
            OpenMode::ExclusiveCreate => options.create_new(true).append(true),
        };
        let file = options.open(&path).map_err(|e| {
            LoggerError::io_operation("opening log file", path.display().to_string(), e)
        })?;

        if config.mode == OpenMode::ExclusiveCreate {
            for index in 1..=config.max_backups {
                let backup = backup_path(&path, index);
                if backup.exists() {
                    // Release the just-created handle before failing.
                    drop(file);
                    return Err(LoggerError::backup_collision(
                        path.display().to_string(),
                        backup.display().to_string(),
                    ));
                }
            }
        }

        // The counter tracks every byte written from here on; the filesystem
        // is consulted only this once.
        let current_size = match config.mode {
            OpenMode::Append => file
                .metadata()
                .map_err(|e| {
                    LoggerError::io_operation(
                        "reading log file metadata",
                        path.display().to_string(),
                        e,
                    )
                })?
                .len(),
            OpenMode::Truncate | OpenMode::ExclusiveCreate => 0,
        };

        if config.mode == OpenMode::Truncate {
            // The primary was just reset; stale backups from a prior run must
            // not linger next to it.
            for index in 1..=config.max_backups {
                let backup = backup_path(&path, index);
                match fs::remove_file(&backup) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => {
                        return Err(LoggerError::io_operation(
                            "removing stale backup",
                            backup.display().to_string(),
                            e,
                        ))
                    }
                }
            }
        }

        Ok(Self {
            path,
            config,
            file: Some(file),
            current_size,
            threshold: Severity::Notset,
            formatter: Arc::new(default_format),
        })
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

    /// Bytes written to the currently open file since it was opened or last
    /// rotated.
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Shift backups one slot up and reopen the primary file.
    ///
    /// Sources move from the highest index down: `path.(N-1)` → `path.N`
    /// first (overwriting the oldest backup), the primary last. Reversing
    /// this order would overwrite backups that have not moved yet.
    fn rotate(&mut self) -> Result<()> {
        // Nothing is buffered, so closing is just releasing the handle.
        drop(self.file.take());

        for index in (0..self.config.max_backups).rev() {
            let source = if index == 0 {
                self.path.clone()
            } else {
                backup_path(&self.path, index)
            };
            if source.exists() {
                let target = backup_path(&self.path, index + 1);
                fs::rename(&source, &target).map_err(|e| {
                    LoggerError::io_operation(
                        "rotating backup",
                        source.display().to_string(),
                        e,
                    )
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "reopening log file after rotation",
                    self.path.display().to_string(),
                    e,
                )
            })?;

        self.file = Some(file);
        self.current_size = 0;
        Ok(())
    }
}

/// Backup file path for a given slot index: `app.log` → `app.log.3`.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut backup = path.to_path_buf();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app.log");
    backup.set_file_name(format!("{}.{}", filename, index));
    backup
}

impl Handler for RotatingFileHandler {
    fn name(&self) -> &str {
        "rotating_file"
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

    fn emit(&mut self, line: &str, _level: Severity) -> Result<()> {
        let mut encoded = Vec::with_capacity(line.len() + 1);
        encoded.extend_from_slice(line.as_bytes());
        encoded.push(b'\n');

        if self.current_size + encoded.len() as u64 > self.config.max_bytes {
            self.rotate()?;
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::handler_closed(self.path.display().to_string()))?;
        file.write_all(&encoded).map_err(|e| {
            LoggerError::io_operation("writing log record", self.path.display().to_string(), e)
        })?;
        self.current_size += encoded.len() as u64;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|e| {
                LoggerError::io_operation("flushing log file", self.path.display().to_string(), e)
            })?;
        }
        Ok(())
    }
}

impl Drop for RotatingFileHandler {
    fn drop(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}
