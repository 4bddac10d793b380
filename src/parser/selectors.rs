//! CSS selectors for listing and detail pages

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    pub static ref TABLE: Selector = parse_selector!("table");
    pub static ref THEAD_ROW: Selector = parse_selector!("thead tr");
    pub static ref ROW: Selector = parse_selector!("tr");
    pub static ref HEADER_CELL: Selector = parse_selector!("th");
    pub static ref DATA_CELL: Selector = parse_selector!("td");
    pub static ref ANCHOR: Selector = parse_selector!("a[href]");
}
