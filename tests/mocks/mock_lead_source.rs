use leads_sms_converter::error::{SourceError, SourceResult};
use leads_sms_converter::{LeadSource, RawBatch, RawRecord};
use std::collections::VecDeque;

enum Step {
    Batch(RawBatch),
    Fail(String),
}

/// Mock lead source for testing.
///
/// Replays a scripted sequence of batches and failures, and counts how many
/// times the pipeline asked for a batch.
#[allow(dead_code)]
pub struct MockLeadSource {
    steps: VecDeque<Step>,
    calls: usize,
}

#[allow(dead_code)]
impl MockLeadSource {
    /// Create an empty source that is exhausted immediately.
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            calls: 0,
        }
    }

    /// Queue a batch with the given header and records.
    pub fn with_batch(mut self, header: &[&str], records: Vec<RawRecord>) -> Self {
        let header = header.iter().map(|h| h.to_string()).collect();
        self.steps
            .push_back(Step::Batch(RawBatch::new(header, records)));
        self
    }

    /// Queue a read failure.
    pub fn with_failure(mut self, message: &str) -> Self {
        self.steps.push_back(Step::Fail(message.to_string()));
        self
    }

    /// Number of times `next_batch` was called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl LeadSource for MockLeadSource {
    fn next_batch(&mut self) -> SourceResult<Option<RawBatch>> {
        self.calls += 1;
        match self.steps.pop_front() {
            Some(Step::Batch(batch)) => Ok(Some(batch)),
            Some(Step::Fail(message)) => Err(SourceError::HttpError(message)),
            None => Ok(None),
        }
    }
}
