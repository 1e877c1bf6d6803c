//! Logging configuration
//!
//! Settings for the console and file log outputs. The subscriber itself is
//! installed by the binary; this module only owns the configuration, the log
//! directory and log file rotation.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

const LOG_FILE_PREFIX: &str = "patchsheet-";
const LOG_FILE_EXTENSION: &str = "log";

/// Logging settings, usually read from the `[logging]` table of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write log lines to stderr
    pub console_output: bool,
    /// Write log lines to a file in `log_dir`
    pub file_output: bool,
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Number of log files kept after cleanup
    pub max_log_files: usize,
    #[serde(skip, default = "log_stamp")]
    stamp: String,
}

fn log_stamp() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("patchsheet").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            console_output: true,
            file_output: false,
            log_dir: default_log_dir(),
            max_log_files: 5,
            stamp: log_stamp(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level, falling back to INFO
    pub fn parse_level(&self) -> LevelFilter {
        self.level
            .trim()
            .parse::<LevelFilter>()
            .unwrap_or(LevelFilter::INFO)
    }

    /// Create the log directory if file output is enabled
    pub fn ensure_log_directory(&self) -> io::Result<()> {
        if self.file_output {
            fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }

    /// Path of the log file for this run
    pub fn current_log_path(&self) -> PathBuf {
        self.log_dir.join(format!(
            "{}{}.{}",
            LOG_FILE_PREFIX, self.stamp, LOG_FILE_EXTENSION
        ))
    }

    /// Delete the oldest log files so at most `max_log_files` remain.
    ///
    /// Returns the number of files removed.
    pub fn cleanup_old_logs(&self) -> io::Result<usize> {
        if !self.log_dir.is_dir() {
            return Ok(0);
        }

        let mut logs: Vec<PathBuf> = fs::read_dir(&self.log_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_log_file(path))
            .collect();

        if logs.len() <= self.max_log_files {
            return Ok(0);
        }

        // Timestamped names sort chronologically
        logs.sort();
        let excess = logs.len() - self.max_log_files;
        for path in &logs[..excess] {
            fs::remove_file(path)?;
        }
        Ok(excess)
    }
}

fn is_log_file(path: &Path) -> bool {
    let named = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
    let extension = path.extension().and_then(|ext| ext.to_str()) == Some(LOG_FILE_EXTENSION);
    named && extension && path.is_file()
}
