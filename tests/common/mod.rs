//! Common test utilities
#![allow(dead_code)]

use std::path::Path;
use tethys::config::{Config, Taxonomy};
use tethys::PublicationRecord;

pub const LISTING_PAGE: &str = include_str!("../fixtures/html/listing_page.html");
pub const EMPTY_LISTING: &str = include_str!("../fixtures/html/empty_listing.html");
pub const DETAIL_EXTERNAL: &str = include_str!("../fixtures/html/detail_external.html");
pub const DETAIL_ACCESS_FILE: &str = include_str!("../fixtures/html/detail_access_file.html");
pub const DETAIL_NO_SOURCE: &str = include_str!("../fixtures/html/detail_no_source.html");

/// Detail page slugs linked from `LISTING_PAGE`, in row order
pub const LISTING_SLUGS: [&str; 3] = [
    "effects-emf-subsea-cables-fish",
    "magnetic-field-sensitivity-elasmobranchs",
    "emf-lobster-behavior",
];

/// Config pointed at a mock server and a temporary output directory
pub fn test_config(base_url: &str, output_dir: &Path, taxonomy: Taxonomy) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.request_timeout_secs = 5;
    config.output.output_dir = output_dir.to_path_buf();
    config.taxonomy = taxonomy;
    config
}

/// Read a tab-delimited output file
pub fn read_output(path: &Path) -> Vec<PublicationRecord> {
    tethys::storage::read_records(path, b'\t').expect("output file should be readable")
}
