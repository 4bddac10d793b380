//! Unified error handling for the tethys crate
//!
//! Extraction problems inside a crawl are absorbed by the walker and turned
//! into pagination stops, so the unified [`Error`] mostly describes what can
//! go wrong around a crawl: configuration, output files, and the HTTP client
//! itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tethys::error::{Error, ErrorCategory};
//!
//! fn handle_error(err: Error) {
//!     if err.category() == ErrorCategory::Storage {
//!         eprintln!("Could not write output: {err}");
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

pub use crate::utils::error::FetchError;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout)
    Network,
    /// Storage and I/O errors
    Storage,
    /// Configuration and validation errors
    Config,
}

impl ErrorCategory {
    /// Short human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Storage => "storage",
            Self::Config => "config",
        }
    }
}

/// Unified error type for the tethys crate
#[derive(Error, Debug)]
pub enum Error {
    /// Fetch-specific errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited output errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(_) => ErrorCategory::Network,
            Self::Io(_) | Self::Csv(_) => ErrorCategory::Storage,
            Self::Config(_) | Self::ConfigParse(_) => ErrorCategory::Config,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
