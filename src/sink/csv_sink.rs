//! CSV sink built on the `csv` crate.

use super::ContactSink;
use crate::domain::{NormalizedContact, OUTPUT_HEADER};
use crate::error::{SinkError, SinkResult};
use crate::pipeline::ContactList;
use std::io::Write;

/// Writes contacts as CSV with the fixed 8-column header.
pub struct CsvContactSink<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl<W: Write> CsvContactSink<W> {
    /// Wrap a writer and emit the header immediately.
    pub fn new(writer: W) -> SinkResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(OUTPUT_HEADER)?;

        Ok(Self { writer, written: 0 })
    }

    /// Number of contacts written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> SinkResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> ContactSink for CsvContactSink<W> {
    fn write_contacts(&mut self, contacts: &[NormalizedContact]) -> SinkResult<()> {
        for contact in contacts {
            self.writer.serialize(contact)?;
        }
        self.written += contacts.len();
        Ok(())
    }

    fn finish(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        tracing::debug!(contacts = self.written, "CSV sink flushed");
        Ok(())
    }
}

impl ContactList {
    /// Serialize the list to UTF-8 CSV bytes, header first.
    pub fn to_csv_bytes(&self) -> SinkResult<Vec<u8>> {
        let mut sink = CsvContactSink::new(Vec::new())?;
        sink.write_contacts(self.contacts())?;
        sink.finish()?;
        sink.into_inner()
    }
}
