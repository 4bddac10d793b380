//! Delimited output files
//!
//! Each subtag's records go to `{tag}-{subtag}.{ext}` and each tag's combined
//! records to `{tag}.{ext}`, written with a header row and no index column.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::Result;
use crate::models::{PublicationRecord, RECORD_COLUMNS};
use crate::utils::sanitize_filename;

/// Writes record sets into an output directory
#[derive(Debug, Clone)]
pub struct RecordWriter {
    /// Output directory
    output_dir: PathBuf,

    /// File extension, without the dot
    extension: String,

    /// Field delimiter byte
    delimiter: u8,
}

impl RecordWriter {
    /// Create a writer, creating the output directory if needed
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory cannot be created, or
    /// `Error::Config` for a non-ASCII delimiter.
    pub fn new(config: &OutputConfig) -> Result<Self> {
        let delimiter = u8::try_from(config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| crate::error::Error::config("delimiter must be ASCII"))?;

        fs::create_dir_all(&config.output_dir)?;

        Ok(Self {
            output_dir: config.output_dir.clone(),
            extension: config.file_extension.clone(),
            delimiter,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file holding one subtag's records
    pub fn subtag_path(&self, tag: &str, subtag: &str) -> PathBuf {
        self.path_for(&format!("{tag}-{subtag}"))
    }

    /// Path of the file holding one tag's records
    pub fn tag_path(&self, tag: &str) -> PathBuf {
        self.path_for(tag)
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", sanitize_filename(stem), self.extension))
    }

    /// Write one subtag's records
    pub fn write_subtag(
        &self,
        tag: &str,
        subtag: &str,
        records: &[PublicationRecord],
    ) -> Result<PathBuf> {
        let path = self.subtag_path(tag, subtag);
        self.write_records(&path, records)?;
        Ok(path)
    }

    /// Write one tag's records
    pub fn write_tag(&self, tag: &str, records: &[PublicationRecord]) -> Result<PathBuf> {
        let path = self.tag_path(tag);
        self.write_records(&path, records)?;
        Ok(path)
    }

    /// Write records to `path`, replacing any previous file
    ///
    /// The header row is written even when there are no records.
    pub fn write_records(&self, path: &Path, records: &[PublicationRecord]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(RECORD_COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), rows = records.len(), "Wrote records");
        Ok(())
    }
}

/// Read records back from a file written by [`RecordWriter`]
pub fn read_records(path: &Path, delimiter: u8) -> Result<Vec<PublicationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<PublicationRecord>, csv::Error>>()?;
    Ok(records)
}
