//! Taxonomy walk with per-subtag pagination
//!
//! For every tag and subtag the walker requests listing pages 0, 1, 2, ...
//! until one does not come back as a page. Records are accumulated in
//! discovery order and written once per subtag and once per tag.

use std::time::Instant;

use crate::config::Taxonomy;
use crate::crawler::page::{PageExtractor, PageOutcome};
use crate::error::Result;
use crate::models::{CrawlSummary, PageKey, PublicationRecord};
use crate::storage::RecordWriter;

/// Drives extraction over a whole taxonomy
pub struct CategoryWalker {
    extractor: PageExtractor,
    taxonomy: Taxonomy,
    writer: RecordWriter,
}

impl CategoryWalker {
    pub fn new(extractor: PageExtractor, taxonomy: Taxonomy, writer: RecordWriter) -> Self {
        Self {
            extractor,
            taxonomy,
            writer,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Crawl every tag and subtag and write the output files
    ///
    /// Extraction failures stop pagination for the affected subtag and are
    /// only logged.
    ///
    /// # Errors
    ///
    /// Returns an error only when an output file cannot be written.
    pub async fn scrape_all(&self) -> Result<CrawlSummary> {
        let started = Instant::now();
        let mut summary = CrawlSummary::default();

        for entry in self.taxonomy.iter() {
            let tag = entry.tag.as_str();
            tracing::info!(tag, "Processing tag");

            let mut tag_records: Vec<PublicationRecord> = Vec::new();
            for subtag in &entry.subtags {
                tracing::info!(tag, subtag = %subtag, "Processing subtag");

                let (subtag_records, pages) = self.scrape_subtag(tag, subtag).await;
                summary.pages += pages;

                tracing::debug!(tag, subtag = %subtag, "Writing subtag data to file");
                self.writer.write_subtag(tag, subtag, &subtag_records)?;
                summary.files_written += 1;
                summary.subtags += 1;

                tracing::info!(
                    tag,
                    subtag = %subtag,
                    pages,
                    records = subtag_records.len(),
                    "Finished subtag"
                );
                tag_records.extend(subtag_records);
            }

            tracing::debug!(tag, "Writing tag data to file");
            self.writer.write_tag(tag, &tag_records)?;
            summary.files_written += 1;
            summary.tags += 1;
            summary.records += tag_records.len();

            tracing::info!(tag, records = tag_records.len(), "Finished tag");
        }

        summary.elapsed = started.elapsed();
        Ok(summary)
    }

    /// Paginate one subtag; returns its records and the number of pages read
    async fn scrape_subtag(&self, tag: &str, subtag: &str) -> (Vec<PublicationRecord>, usize) {
        let mut records = Vec::new();
        let mut page_index: u32 = 0;

        loop {
            let key = PageKey::new(tag, subtag, page_index);
            tracing::info!(page = page_index, "Processing page");

            match self.extractor.fetch_page(key).await {
                PageOutcome::Page(rows) => {
                    tracing::debug!(page = page_index, rows = rows.len(), "Merging page data");
                    records.extend(rows);
                    tracing::info!(page = page_index, "Finished page");
                }
                PageOutcome::EndOfPagination => {
                    tracing::info!(page = page_index, "Page not found, moving on");
                    break;
                }
                PageOutcome::SchemaMismatch { expected, found } => {
                    tracing::error!(
                        page = %key,
                        expected,
                        found,
                        "Table shape mismatch, stopping pagination"
                    );
                    break;
                }
                PageOutcome::Failed(e) => {
                    tracing::error!(page = %key, error = %e, "Page failed, stopping pagination");
                    break;
                }
            }

            page_index += 1;
        }

        (records, page_index as usize)
    }
}
