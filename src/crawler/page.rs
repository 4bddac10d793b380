//! Listing page extraction
//!
//! Fetches one listing page, pulls out the publication table, checks it has
//! the expected shape, and merges the source link column onto it.

use std::sync::Arc;
use thiserror::Error;

use crate::crawler::fetcher::PageSource;
use crate::crawler::links::{LinkError, LinkExtractor};
use crate::crawler::url::page_url;
use crate::models::{PageKey, PageResult, PublicationRecord, TABLE_COLUMNS};
use crate::parser::{find_tables, ParsedTable, LISTING_TABLE_MARKER};
use crate::utils::error::FetchError;

/// Failures that abandon a listing page
#[derive(Error, Debug)]
pub enum PageError {
    /// Transport failure other than a client-error status
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The link column could not be built
    #[error("link extraction failed: {0}")]
    Links(#[from] LinkError),

    /// Table rows and publication anchors disagree in number
    #[error("table has {rows} rows but {links} publication links were found")]
    LinkCountMismatch { rows: usize, links: usize },

    /// A row does not have the metadata column count
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Result of extracting one listing page
#[derive(Debug)]
pub enum PageOutcome {
    /// Well-formed page with its records in table order
    Page(PageResult),

    /// The page does not exist or carries no publication table
    EndOfPagination,

    /// The first publication table has the wrong number of columns
    SchemaMismatch { expected: usize, found: usize },

    /// The page could not be extracted
    Failed(PageError),
}

/// Extracts publication records from listing pages
pub struct PageExtractor {
    source: Arc<dyn PageSource>,
    links: LinkExtractor,
    base_url: String,
}

impl PageExtractor {
    pub fn new(source: Arc<dyn PageSource>, links: LinkExtractor, base_url: &str) -> Self {
        Self {
            source,
            links,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Extract the publication records of one listing page
    pub async fn fetch_page(&self, key: PageKey<'_>) -> PageOutcome {
        let url = page_url(&self.base_url, key.tag, key.subtag, key.page_index);

        let html = match self.source.fetch_html(&url).await {
            Ok(html) => html,
            Err(e) if e.is_client_error() => {
                tracing::info!(url = %url, error = %e, "Listing page not found");
                return PageOutcome::EndOfPagination;
            }
            Err(source) => {
                tracing::error!(url = %url, error = %source, "Listing page fetch failed");
                return PageOutcome::Failed(PageError::Fetch { url, source });
            }
        };

        let mut tables = find_tables(&html, LISTING_TABLE_MARKER);
        if tables.is_empty() {
            tracing::info!(url = %url, "No table of publications on page");
            return PageOutcome::EndOfPagination;
        }

        if tables.len() > 1 {
            tracing::warn!(
                url = %url,
                tables = tables.len(),
                "Multiple tables might contain publication data; using the first"
            );
        }

        let table = tables.swap_remove(0);
        if table.column_count() != TABLE_COLUMNS.len() {
            tracing::error!(
                url = %url,
                expected = TABLE_COLUMNS.len(),
                found = table.column_count(),
                "First matching table does not contain publication data"
            );
            return PageOutcome::SchemaMismatch {
                expected: TABLE_COLUMNS.len(),
                found: table.column_count(),
            };
        }

        tracing::debug!(page = %key, "Retrieving source links");
        let links = match self.links.fetch_links(key).await {
            Ok(links) => links,
            Err(e) => return PageOutcome::Failed(e.into()),
        };

        tracing::debug!(page = %key, rows = table.row_count(), "Merging links with page data");
        match merge_links(table, links) {
            Ok(records) => PageOutcome::Page(records),
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Cannot align links with table rows");
                PageOutcome::Failed(e)
            }
        }
    }
}

/// Zip table rows with links, position by position
///
/// # Errors
///
/// Returns `PageError::LinkCountMismatch` unless there is exactly one link per
/// row.
pub fn merge_links(table: ParsedTable, links: Vec<String>) -> Result<PageResult, PageError> {
    if table.row_count() != links.len() {
        return Err(PageError::LinkCountMismatch {
            rows: table.row_count(),
            links: links.len(),
        });
    }

    let width = table.column_count();
    table
        .rows
        .into_iter()
        .zip(links)
        .map(|(cells, link)| {
            PublicationRecord::from_cells(cells, link).ok_or(PageError::ColumnCount {
                expected: TABLE_COLUMNS.len(),
                found: width,
            })
        })
        .collect()
}
