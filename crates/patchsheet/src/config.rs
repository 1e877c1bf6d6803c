//! Application configuration
//!
//! Read from a TOML file. Every key is optional:
//!
//! ```toml
//! output_dir = "/home/lx/shows"
//!
//! [logging]
//! level = "info"
//! file_output = true
//!
//! [style]
//! font_name = "Arial"
//! alternate_color = "#E8F0FF"
//! ```

use anyhow::{Context, Result};
use patchsheet_core::LogConfig;
use patchsheet_io::{default_output_dir, SheetStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the workbook is saved in
    pub output_dir: Option<PathBuf>,
    pub logging: LogConfig,
    pub style: SheetStyle,
}

impl AppConfig {
    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("patchsheet");
            p.push("config.toml");
            p
        })
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if a file is there, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::config_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Output directory, falling back to the download directory
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }
}
