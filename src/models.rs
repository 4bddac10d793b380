// Core data structures for the tethys crawler

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Metadata columns of a publication listing table, in page order
pub const TABLE_COLUMNS: [&str; 7] = [
    "title",
    "authors",
    "date",
    "content_type",
    "technology_type",
    "stressor",
    "receptor",
];

/// Column names of a [`PublicationRecord`], in output order
pub const RECORD_COLUMNS: [&str; 8] = [
    "title",
    "authors",
    "date",
    "content_type",
    "technology_type",
    "stressor",
    "receptor",
    "paper_url",
];

/// One publication row from a listing page, with its source link merged in.
///
/// Field order is the output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub content_type: String,
    pub technology_type: String,
    pub stressor: String,
    pub receptor: String,
    pub paper_url: String,
}

impl PublicationRecord {
    /// Build a record from one table row and its link.
    ///
    /// Returns `None` unless `cells` holds exactly the seven metadata columns.
    pub fn from_cells(cells: Vec<String>, paper_url: String) -> Option<Self> {
        let [title, authors, date, content_type, technology_type, stressor, receptor]: [String; 7] =
            cells.try_into().ok()?;

        Some(Self {
            title,
            authors,
            date,
            content_type,
            technology_type,
            stressor,
            receptor,
            paper_url,
        })
    }
}

/// Records from one listing page, in table order
pub type PageResult = Vec<PublicationRecord>;

/// Identifies one listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey<'a> {
    pub tag: &'a str,
    pub subtag: &'a str,
    pub page_index: u32,
}

impl<'a> PageKey<'a> {
    pub fn new(tag: &'a str, subtag: &'a str, page_index: u32) -> Self {
        Self {
            tag,
            subtag,
            page_index,
        }
    }
}

impl fmt::Display for PageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} page {}", self.tag, self.subtag, self.page_index)
    }
}

/// Crawl statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlSummary {
    pub tags: usize,
    pub subtags: usize,
    pub pages: usize,
    pub records: usize,
    pub files_written: usize,
    pub elapsed: Duration,
}

impl CrawlSummary {
    /// Average records per page
    pub fn records_per_page(&self) -> f64 {
        if self.pages == 0 {
            0.0
        } else {
            self.records as f64 / self.pages as f64
        }
    }
}
