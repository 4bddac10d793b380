//! tethys - Tethys research database crawler
//!
//! Walks the tag/subtag taxonomy of the Tethys environmental-effects
//! database, extracts the publication table from every listing page, follows
//! each publication to its source link, and writes tab-delimited files per
//! subtag and per tag.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and the taxonomy
//! - [`crawler`] - Pagination, page extraction and link extraction
//! - [`parser`] - HTML table and anchor extraction
//! - [`models`] - Core data structures and types
//! - [`storage`] - Delimited output files
//! - [`utils`] - Common utilities, errors and logging setup
//!
//! # Example
//!
//! ```no_run
//! use tethys::config::Config;
//! use tethys::crawler::Crawler;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let crawler = Crawler::new(config)?;
//!     let summary = crawler.run().await?;
//!     println!("{} records", summary.records);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, Taxonomy};
    pub use crate::crawler::{CategoryWalker, Crawler, PageOutcome, PageSource};
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{CrawlSummary, PublicationRecord};
    pub use crate::storage::RecordWriter;
}

// Direct re-exports for convenience
pub use models::{CrawlSummary, PublicationRecord};
