// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for wcag-catalog

use crate::checklist::{ChecklistFilter, Column};
use crate::criterion::WcagLevel;
use crate::error::{CatalogError, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Defaults applied when the CLI flag is absent
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Checklist export settings
    #[serde(default)]
    pub checklist: ChecklistConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Conformance target for `list` when no level is given
    #[serde(default = "default_level")]
    pub level: WcagLevel,

    /// Output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> WcagLevel {
    WcagLevel::AAA
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum results shown
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

fn default_search_limit() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistConfig {
    #[serde(flatten)]
    pub filter: ChecklistFilter,

    /// Columns to export, in order
    #[serde(default = "Column::defaults")]
    pub columns: Vec<Column>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            filter: ChecklistFilter::default(),
            columns: Column::defaults(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            return Err(CatalogError::Config("search.limit must be at least 1".to_string()));
        }
        if self.checklist.columns.is_empty() {
            return Err(CatalogError::Config("checklist.columns must not be empty".to_string()));
        }
        if self.checklist.filter.levels.is_empty() {
            return Err(CatalogError::Config("checklist.levels must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Load configuration from a path; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config location, relative to the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".wcag-catalog.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = toml::to_string_pretty(&config).map_err(|e| CatalogError::Config(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
