//! CSV source reader built on the `csv` crate.

use super::{LeadSource, RawBatch};
use crate::domain::RawRecord;
use crate::error::SourceResult;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Records per batch when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Reads a leads CSV in batches of at most `batch_size` records.
///
/// The header is read once up front and attached to every batch. Empty
/// cells are left absent, short rows are padded with absent cells and extra
/// trailing cells are ignored. A header-only input yields a single empty
/// batch so the pipeline still sees the header.
pub struct CsvLeadSource<R: Read> {
    reader: csv::Reader<R>,
    header: Vec<String>,
    batch_size: usize,
    emitted: bool,
    exhausted: bool,
}

impl CsvLeadSource<File> {
    /// Open a CSV file.
    pub fn from_path(path: impl AsRef<Path>, batch_size: usize) -> SourceResult<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Opened leads file");
        Self::from_reader(file, batch_size)
    }
}

impl CsvLeadSource<Cursor<Vec<u8>>> {
    /// Read CSV from an in-memory buffer, such as a downloaded sheet.
    pub fn from_bytes(bytes: Vec<u8>, batch_size: usize) -> SourceResult<Self> {
        Self::from_reader(Cursor::new(bytes), batch_size)
    }
}

impl<R: Read> CsvLeadSource<R> {
    /// Wrap any reader. A `batch_size` of zero is treated as one.
    pub fn from_reader(reader: R, batch_size: usize) -> SourceResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|cell| {
                String::from_utf8_lossy(cell)
                    .trim_start_matches('\u{feff}')
                    .to_string()
            })
            .collect();

        Ok(Self {
            reader,
            header,
            batch_size: batch_size.max(1),
            emitted: false,
            exhausted: false,
        })
    }

    /// The header as read from the input.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Cells that are not valid UTF-8 are decoded lossily.
    fn to_record(&self, row: &csv::ByteRecord) -> RawRecord {
        let mut record = RawRecord::new();
        for (column, value) in self.header.iter().zip(row.iter()) {
            if !value.is_empty() {
                record.insert(column, String::from_utf8_lossy(value).into_owned());
            }
        }
        record
    }
}

impl<R: Read> LeadSource for CsvLeadSource<R> {
    fn next_batch(&mut self) -> SourceResult<Option<RawBatch>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut records = Vec::with_capacity(self.batch_size);
        let mut row = csv::ByteRecord::new();
        while records.len() < self.batch_size {
            if !self.reader.read_byte_record(&mut row)? {
                self.exhausted = true;
                break;
            }
            records.push(self.to_record(&row));
        }

        if records.is_empty() && self.emitted {
            return Ok(None);
        }
        self.emitted = true;

        tracing::debug!(records = records.len(), "Read CSV batch");
        Ok(Some(RawBatch::new(self.header.clone(), records)))
    }
}
