//! Web crawling functionality
//!
//! This module implements the crawl of the research database: a
//! [`walker::CategoryWalker`] paginates every subtag, a
//! [`page::PageExtractor`] turns each listing page into records, and a
//! [`links::LinkExtractor`] follows publication anchors to their source links.
//! All network access goes through a [`fetcher::PageSource`].

pub mod fetcher;
pub mod links;
pub mod page;
pub mod url;
pub mod walker;

pub use fetcher::{HttpFetcher, PageSource};
pub use links::{LinkError, LinkExtractor};
pub use page::{PageError, PageExtractor, PageOutcome};
pub use walker::CategoryWalker;

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::Arc;

use crate::config::Config;
use crate::storage::RecordWriter;

/// Main crawler structure
pub struct Crawler {
    walker: CategoryWalker,
}

impl Crawler {
    /// Create a crawler talking to the live site
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.site).context("Failed to create HTTP client")?;
        Self::with_source(config, Arc::new(fetcher))
    }

    /// Create a crawler on top of any page source
    pub fn with_source(config: Config, source: Arc<dyn PageSource>) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let pattern = Regex::new(&config.site.publication_pattern)
            .context("Invalid publication pattern")?;
        let links = LinkExtractor::new(Arc::clone(&source), &config.site.base_url, pattern);
        let extractor = PageExtractor::new(source, links, &config.site.base_url);
        let writer =
            RecordWriter::new(&config.output).context("Failed to prepare output directory")?;

        Ok(Self {
            walker: CategoryWalker::new(extractor, config.taxonomy, writer),
        })
    }

    pub fn walker(&self) -> &CategoryWalker {
        &self.walker
    }

    /// Crawl the configured taxonomy
    pub async fn run(&self) -> Result<crate::models::CrawlSummary> {
        self.walker.scrape_all().await.context("Crawl aborted")
    }
}
