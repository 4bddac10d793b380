//! HTML parsing and data extraction
//!
//! This module turns listing and detail pages into plain data: publication
//! tables, publication anchors, and outbound source links.

pub mod anchors;
pub mod selectors;
pub mod table;

pub use anchors::{find_source_link, matching_hrefs, SourceLink};
pub use table::{find_tables, ParsedTable};

/// Header text that identifies a publication listing table
pub const LISTING_TABLE_MARKER: &str = "Title";
