//! Error types for the tethys crawler
//!
//! This module defines the low-level error types shared by the fetch and
//! extraction layers.

use thiserror::Error;

/// Errors that can occur during HTTP fetching operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("HTTP status {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether the server answered with a 4xx status.
    ///
    /// This is how the site signals that a listing page does not exist.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Status(code) => (400..500).contains(code),
            Self::Http(e) => e.status().is_some_and(|s| s.is_client_error()),
            _ => false,
        }
    }
}
