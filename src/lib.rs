//! Leads SMS Converter - normalize loosely-structured leads exports into
//! fixed-schema contact lists for bulk SMS import.
//!
//! A lead row may carry several phone numbers, each tagged with a line type,
//! several email addresses, and name/address columns under varying headers.
//! The pipeline keeps only SMS-capable numbers, de-duplicates emails, and
//! pairs them positionally into one output row per phone/email slot.
//!
//! # Architecture
//!
//! - **domain**: Raw records, resolved column roles, and the output contact row
//! - **pipeline**: Column resolution, candidate extraction, row expansion, assembly
//! - **source**: Source readers producing batches of raw records (CSV)
//! - **sink**: Sinks serializing normalized contacts (CSV)
//! - **client**: Google Sheets CSV export download
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Run counters and download timing

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use client::{AsyncSheetClient, AsyncSheetClientImpl, SheetClient};
pub use config::Config;
pub use domain::{
    CellValue, ColumnRoleSet, EmailAddress, LineTypeFilter, NormalizedContact, RawRecord,
    OUTPUT_HEADER,
};
pub use error::{ConfigError, PipelineError, SinkError, SourceError};
pub use metrics::{FetchTimer, Metrics, MetricsSummary};
pub use pipeline::{
    assemble, expand, extract_emails, extract_phones, resolve, ContactList, LeadsPipeline,
    Notice, PipelineOptions, PipelineOutput, RunReport,
};
pub use sink::{ContactSink, CsvContactSink};
pub use source::{CsvLeadSource, LeadSource, RawBatch};
