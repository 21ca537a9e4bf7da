//! Source readers: collaborators that turn bytes into batches of raw records.
//!
//! The pipeline only depends on the [`LeadSource`] trait. A source yields a
//! finite sequence of batches; every batch of one source carries the same
//! header.

mod csv_source;

pub use csv_source::{CsvLeadSource, DEFAULT_BATCH_SIZE};

use crate::domain::RawRecord;
use crate::error::SourceResult;

/// One bounded chunk of input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBatch {
    /// Header cells exactly as read from the source.
    pub header: Vec<String>,

    /// Records in input order.
    pub records: Vec<RawRecord>,
}

impl RawBatch {
    pub fn new(header: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self { header, records }
    }
}

/// Produces batches of raw lead records.
pub trait LeadSource {
    /// Return the next batch, or `None` when the input is exhausted.
    ///
    /// # Errors
    ///
    /// Any error is fatal for the run: the pipeline reports it as
    /// `PipelineError::SourceUnavailable` and returns no output.
    fn next_batch(&mut self) -> SourceResult<Option<RawBatch>>;
}
