//! HTTP fetching behind an injectable page source
//!
//! Extraction code never talks to `reqwest` directly. It asks a
//! [`PageSource`] for the HTML behind a URL, which lets tests substitute canned
//! pages for the live site.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client,
};
use std::time::Duration;

use crate::config::SiteConfig;
use crate::utils::error::FetchError;

/// Source of raw HTML for a URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url` as text
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` for non-success responses and
    /// `FetchError::Http`/`FetchError::Timeout` for transport failures.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// `reqwest`-backed page source
///
/// Requests are issued one at a time by the callers; the fetcher itself keeps
/// no queue and performs no retries.
pub struct HttpFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from site configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(site: &SiteConfig) -> Result<Self, FetchError> {
        Self::with_config(&site.user_agent, site.request_timeout())
    }

    /// Create a fetcher with an explicit user agent and timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(Self::build_headers())
            .timeout(timeout)
            .gzip(true)
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }

    /// Standard browser headers sent with every request
    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        tracing::trace!(url = %url, "Fetching URL");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
