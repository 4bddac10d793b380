//! HTML table extraction
//!
//! Turns `<table>` elements into rows of cell text. Only tables whose header
//! row mentions a given marker (the listing pages use `Title`) are returned,
//! which keeps layout tables and sidebars out of the results.

use scraper::{ElementRef, Html};

use super::selectors::{DATA_CELL, HEADER_CELL, ROW, TABLE, THEAD_ROW};
use crate::utils::normalize_whitespace;

/// A parsed HTML table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTable {
    /// Header cell text
    pub headers: Vec<String>,

    /// Body rows, each padded or truncated to the header width
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Extract every table whose header text contains `header_marker`, in
/// document order
pub fn find_tables(html: &str, header_marker: &str) -> Vec<ParsedTable> {
    let document = Html::parse_document(html);

    document
        .select(&TABLE)
        .filter_map(parse_table)
        .filter(|table| table.headers.iter().any(|h| h.contains(header_marker)))
        .collect()
}

/// Parse a single table element. Tables without a header row yield `None`.
fn parse_table(table: ElementRef<'_>) -> Option<ParsedTable> {
    let header_row = header_row(table)?;
    let headers: Vec<String> = cells(header_row);
    let width = headers.len();

    let rows = table
        .select(&ROW)
        .filter(|row| row.id() != header_row.id())
        .filter(|row| row.select(&DATA_CELL).next().is_some())
        .map(|row| {
            let mut cells = cells(row);
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Some(ParsedTable { headers, rows })
}

/// The `<thead>` row if there is one, otherwise the first row made only of `<th>`
fn header_row(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(row) = table.select(&THEAD_ROW).next() {
        return Some(row);
    }

    table.select(&ROW).find(|row| {
        row.select(&HEADER_CELL).next().is_some() && row.select(&DATA_CELL).next().is_none()
    })
}

/// Direct `<th>`/`<td>` children of a row, as normalized text
fn cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
        .map(|cell| normalize_whitespace(&cell.text().collect::<String>()))
        .collect()
}
