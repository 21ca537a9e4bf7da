//! Error types for the leads converter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by source readers while producing batches of raw records.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source URL is not one we know how to export as CSV
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Remote returned an error status code
    #[error("Source error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Remote resource not found
    #[error("Source not found: {0}")]
    NotFound(String),

    /// The tabular payload could not be parsed
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Local I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by sinks while serializing normalized contacts.
#[derive(Error, Debug)]
pub enum SinkError {
    /// CSV serialization failed
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal errors for one pipeline invocation.
///
/// Everything that can go wrong with a single record or header is recovered
/// inside the pipeline; only the collaborators can abort a run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source reader could not produce a batch
    #[error("Source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// The sink rejected the output
    #[error("Sink failed: {0}")]
    SinkFailed(#[from] SinkError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with SinkError
pub type SinkResult<T> = Result<T, SinkError>;

/// Convenience type alias for Results with PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
