//! Configuration management for the tethys crawler
//!
//! This module handles loading and validating configuration from TOML files,
//! with defaults matching the public Tethys site. Command-line flags are
//! applied on top by the binary.

mod taxonomy;

pub use taxonomy::{TagEntry, Taxonomy};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Target site configuration
    pub site: SiteConfig,

    /// Output file configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Tags and subtags to crawl
    pub taxonomy: Taxonomy,
}

/// Target site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root, without trailing slash
    pub base_url: String,

    /// User agent string
    pub user_agent: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Regex an href must match to count as a publication detail link
    pub publication_pattern: String,
}

impl SiteConfig {
    /// Request timeout as a Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the per-tag and per-subtag files are written to
    pub output_dir: PathBuf,

    /// File extension, without the dot
    pub file_extension: String,

    /// Field delimiter
    pub delimiter: char,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding the log file
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    pub file_name: String,

    /// Console level (trace, debug, info, warn, error)
    pub console_level: String,

    /// Log file level
    pub file_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://tethys.pnnl.gov"),
            user_agent: format!("tethys/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            publication_pattern: String::from("/publications/"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_extension: String::from("csv"),
            delimiter: '\t',
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: String::from("tethys.log"),
            console_level: String::from("info"),
            file_level: String::from("debug"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }

        Url::parse(&self.site.base_url)
            .map_err(|e| Error::config(format!("base_url is not a valid URL: {e}")))?;

        if self.site.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }

        regex::Regex::new(&self.site.publication_pattern)
            .map_err(|e| Error::config(format!("publication_pattern is not a valid regex: {e}")))?;

        if !self.output.delimiter.is_ascii() {
            return Err(Error::config("delimiter must be a single ASCII character"));
        }

        if self.taxonomy.is_empty() {
            return Err(Error::config("taxonomy must contain at least one tag"));
        }

        if let Some(entry) = self.taxonomy.iter().find(|e| e.subtags.is_empty()) {
            return Err(Error::config(format!("tag '{}' has no subtags", entry.tag)));
        }

        Ok(())
    }

    /// Full path of the log file
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logging.log_dir.join(&self.logging.file_name)
    }
}
