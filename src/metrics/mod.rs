//! Basic metrics instrumentation for conversion runs.
//!
//! Counters for records flowing through the pipeline and duration tracking
//! for sheet downloads.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for a converter process.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Raw records read from the source
    records_read_total: Arc<AtomicU64>,

    /// Records that produced no contact
    records_skipped_total: Arc<AtomicU64>,

    /// Normalized contacts emitted
    contacts_emitted_total: Arc<AtomicU64>,

    /// Source batches processed
    batches_total: Arc<AtomicU64>,

    /// Sheet downloads attempted
    fetch_requests_total: Arc<AtomicU64>,

    /// Sheet downloads that failed
    fetch_errors_total: Arc<AtomicU64>,

    /// Total download time in milliseconds
    fetch_duration_total_ms: Arc<AtomicU64>,

    /// Bytes downloaded
    bytes_fetched_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            records_read_total: Arc::new(AtomicU64::new(0)),
            records_skipped_total: Arc::new(AtomicU64::new(0)),
            contacts_emitted_total: Arc::new(AtomicU64::new(0)),
            batches_total: Arc::new(AtomicU64::new(0)),
            fetch_requests_total: Arc::new(AtomicU64::new(0)),
            fetch_errors_total: Arc::new(AtomicU64::new(0)),
            fetch_duration_total_ms: Arc::new(AtomicU64::new(0)),
            bytes_fetched_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one processed batch.
    pub fn record_batch(&self, records: usize, skipped: usize, contacts: usize) {
        self.batches_total.fetch_add(1, Ordering::Relaxed);
        self.records_read_total
            .fetch_add(records as u64, Ordering::Relaxed);
        self.records_skipped_total
            .fetch_add(skipped as u64, Ordering::Relaxed);
        self.contacts_emitted_total
            .fetch_add(contacts as u64, Ordering::Relaxed);
    }

    /// Record a sheet download with duration.
    pub fn record_fetch(&self, duration: Duration) {
        self.fetch_requests_total.fetch_add(1, Ordering::Relaxed);
        self.fetch_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed download.
    pub fn record_fetch_error(&self) {
        self.fetch_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record downloaded bytes.
    pub fn record_bytes_fetched(&self, bytes: usize) {
        self.bytes_fetched_total
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn records_read_total(&self) -> u64 {
        self.records_read_total.load(Ordering::Relaxed)
    }

    pub fn records_skipped_total(&self) -> u64 {
        self.records_skipped_total.load(Ordering::Relaxed)
    }

    pub fn contacts_emitted_total(&self) -> u64 {
        self.contacts_emitted_total.load(Ordering::Relaxed)
    }

    pub fn batches_total(&self) -> u64 {
        self.batches_total.load(Ordering::Relaxed)
    }

    pub fn fetch_requests_total(&self) -> u64 {
        self.fetch_requests_total.load(Ordering::Relaxed)
    }

    pub fn fetch_errors_total(&self) -> u64 {
        self.fetch_errors_total.load(Ordering::Relaxed)
    }

    pub fn fetch_duration_total_ms(&self) -> u64 {
        self.fetch_duration_total_ms.load(Ordering::Relaxed)
    }

    pub fn bytes_fetched_total(&self) -> u64 {
        self.bytes_fetched_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.records_read_total.store(0, Ordering::Relaxed);
        self.records_skipped_total.store(0, Ordering::Relaxed);
        self.contacts_emitted_total.store(0, Ordering::Relaxed);
        self.batches_total.store(0, Ordering::Relaxed);
        self.fetch_requests_total.store(0, Ordering::Relaxed);
        self.fetch_errors_total.store(0, Ordering::Relaxed);
        self.fetch_duration_total_ms.store(0, Ordering::Relaxed);
        self.bytes_fetched_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            records_read_total: self.records_read_total(),
            records_skipped_total: self.records_skipped_total(),
            contacts_emitted_total: self.contacts_emitted_total(),
            batches_total: self.batches_total(),
            fetch_requests_total: self.fetch_requests_total(),
            fetch_errors_total: self.fetch_errors_total(),
            fetch_duration_total_ms: self.fetch_duration_total_ms(),
            bytes_fetched_total: self.bytes_fetched_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub records_read_total: u64,
    pub records_skipped_total: u64,
    pub contacts_emitted_total: u64,
    pub batches_total: u64,
    pub fetch_requests_total: u64,
    pub fetch_errors_total: u64,
    pub fetch_duration_total_ms: u64,
    pub bytes_fetched_total: u64,
}

/// Helper for timing sheet downloads.
pub struct FetchTimer {
    start: Instant,
    metrics: Metrics,
}

impl FetchTimer {
    /// Start timing a download.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the downloaded size.
    pub fn complete(self, bytes: usize) {
        self.metrics.record_fetch(self.start.elapsed());
        self.metrics.record_bytes_fetched(bytes);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_fetch(self.start.elapsed());
        self.metrics.record_fetch_error();
    }
}
