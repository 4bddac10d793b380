//! Anchor extraction for listing and detail pages

use regex::Regex;
use scraper::Html;

use super::selectors::ANCHOR;

/// Label of the outbound publisher link on a detail page
pub const EXTERNAL_LINK_LABEL: &str = "External Link";

/// Label of the hosted file link on a detail page
pub const ACCESS_FILE_LABEL: &str = "Access File";

/// Outbound source found on a publication detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLink {
    /// Anchor labelled "External Link"
    External(String),
    /// Anchor labelled "Access File"
    AccessFile(String),
}

impl SourceLink {
    pub fn href(&self) -> &str {
        match self {
            Self::External(href) | Self::AccessFile(href) => href,
        }
    }
}

/// Hrefs of all anchors matching `pattern`, in document order
///
/// Duplicates are kept: each anchor counts, since the caller aligns this list
/// with table rows by position.
pub fn matching_hrefs(html: &str, pattern: &Regex) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| pattern.is_match(href))
        .map(str::to_string)
        .collect()
}

/// Locate the outbound source on a detail page
///
/// An "External Link" anchor wins over an "Access File" anchor.
pub fn find_source_link(html: &str) -> Option<SourceLink> {
    let document = Html::parse_document(html);

    if let Some(href) = find_labelled(&document, EXTERNAL_LINK_LABEL) {
        return Some(SourceLink::External(href));
    }

    find_labelled(&document, ACCESS_FILE_LABEL).map(SourceLink::AccessFile)
}

/// Href of the first anchor whose trimmed text is exactly `label`
fn find_labelled(document: &Html, label: &str) -> Option<String> {
    document
        .select(&ANCHOR)
        .find(|a| a.text().collect::<String>().trim() == label)
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}
