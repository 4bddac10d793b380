//! Source link extraction for listing pages
//!
//! Each row of a listing table links to a publication detail page on the
//! site. The detail page in turn points at the actual paper: an "External
//! Link" to the publisher, or an "Access File" link to a hosted copy. This
//! module follows every publication anchor on a listing page and collects one
//! source link per anchor.

use regex::Regex;
use std::sync::Arc;
use thiserror::Error;

use crate::crawler::fetcher::PageSource;
use crate::crawler::url::{page_url, site_url};
use crate::models::PageKey;
use crate::parser::{find_source_link, matching_hrefs, SourceLink};
use crate::utils::error::FetchError;

/// Errors that abandon the link column of a listing page
#[derive(Error, Debug)]
pub enum LinkError {
    /// The listing page itself could not be fetched
    #[error("failed to fetch listing page {url}: {source}")]
    ListingFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A publication detail page could not be fetched
    #[error("failed to fetch detail page {url}: {source}")]
    DetailFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A publication href could not be turned into an absolute URL
    #[error(transparent)]
    InvalidUrl(#[from] FetchError),
}

/// Follows publication anchors to their outbound source links
pub struct LinkExtractor {
    source: Arc<dyn PageSource>,
    base_url: String,
    publication_pattern: Regex,
}

impl LinkExtractor {
    pub fn new(source: Arc<dyn PageSource>, base_url: &str, publication_pattern: Regex) -> Self {
        Self {
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
            publication_pattern,
        }
    }

    /// Collect one source link per publication anchor on a listing page, in
    /// anchor order
    ///
    /// # Errors
    ///
    /// Returns `LinkError` if the listing page or any detail page cannot be
    /// fetched. A detail page without a recognizable source link is not an
    /// error: its own URL is used instead.
    pub async fn fetch_links(&self, key: PageKey<'_>) -> Result<Vec<String>, LinkError> {
        let url = page_url(&self.base_url, key.tag, key.subtag, key.page_index);

        let html = match self.source.fetch_html(&url).await {
            Ok(html) => html,
            Err(source) => {
                tracing::error!(
                    url = %url,
                    error = %source,
                    "Listing page fetch failed; link column for this page is abandoned"
                );
                return Err(LinkError::ListingFetch { url, source });
            }
        };

        let hrefs = matching_hrefs(&html, &self.publication_pattern);
        tracing::debug!(page = %key, anchors = hrefs.len(), "Found publication anchors");

        let mut links = Vec::with_capacity(hrefs.len());
        for href in hrefs {
            let detail_url = site_url(&self.base_url, &url, &href)?;
            links.push(self.resolve_source_link(&detail_url).await?);
        }

        Ok(links)
    }

    /// Outbound link for one detail page, falling back to the page URL
    async fn resolve_source_link(&self, detail_url: &str) -> Result<String, LinkError> {
        tracing::debug!(url = %detail_url, "Looking for source link");

        let html = self
            .source
            .fetch_html(detail_url)
            .await
            .map_err(|source| LinkError::DetailFetch {
                url: detail_url.to_string(),
                source,
            })?;

        let link = match find_source_link(&html) {
            Some(link) => link,
            None => {
                tracing::warn!(
                    url = %detail_url,
                    "No source link on detail page; using the detail page URL instead"
                );
                return Ok(detail_url.to_string());
            }
        };

        match &link {
            SourceLink::External(href) => {
                tracing::debug!(href = %href, url = %detail_url, "Found external source link")
            }
            SourceLink::AccessFile(href) => {
                tracing::debug!(href = %href, url = %detail_url, "Found hosted file link")
            }
        }

        Ok(site_url(&self.base_url, detail_url, link.href())?)
    }
}
