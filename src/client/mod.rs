//! HTTP client for downloading Google Sheets as CSV.
//!
//! This module provides a synchronous client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client turns a sheet's browser URL into
//! its CSV export URL, downloads it, and maps transport and status failures to
//! `SourceError`.

mod async_wrapper;
pub use async_wrapper::{AsyncSheetClient, AsyncSheetClientImpl};

use crate::config::Config;
use crate::error::{SourceError, SourceResult};
use crate::metrics::{FetchTimer, Metrics};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

static SHEET_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://docs\.google\.com/spreadsheets/d/([A-Za-z0-9_-]+)")
        .expect("sheet URL pattern is valid")
});

static SHEET_GID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#?&]gid=(\d+)").expect("gid pattern is valid"));

/// Whether a string looks like a remote URL rather than a local path.
pub fn is_remote(input: &str) -> bool {
    let lower = input.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// HTTP client for Google Sheets CSV exports.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SheetClient {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Sheet (tab) to export instead of the first one
    sheet_name: Option<String>,

    /// Metrics collector
    metrics: Metrics,
}

impl SheetClient {
    /// Create a new SheetClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(Duration::from_secs(config.request_timeout))
            .with_sheet_name(config.sheet_name.clone())
    }

    /// Create a SheetClient with an explicit timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent: Arc::new(agent),
            sheet_name: None,
            metrics: Metrics::new(),
        }
    }

    /// Export a specific sheet (tab) by name.
    pub fn with_sheet_name(mut self, sheet_name: Option<String>) -> Self {
        self.sheet_name = sheet_name.filter(|name| !name.trim().is_empty());
        self
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the CSV export URL for a Google Sheets browser URL.
    ///
    /// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=7` becomes
    /// `https://docs.google.com/spreadsheets/d/<id>/gviz/tq?tqx=out:csv&gid=7`.
    /// A sheet name, when given, is appended as `&sheet=`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` for anything that is not a Google
    /// Sheets document URL.
    pub fn export_url(sheet_url: &str, sheet_name: Option<&str>) -> SourceResult<String> {
        let sheet_url = sheet_url.trim();
        let id = SHEET_URL
            .captures(sheet_url)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                SourceError::InvalidUrl(format!("not a Google Sheets URL: {}", sheet_url))
            })?
            .as_str();

        let mut url = format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv",
            id
        );
        if let Some(name) = sheet_name {
            url.push_str("&sheet=");
            url.push_str(&urlencoding::encode(name));
        }
        if let Some(gid) = SHEET_GID.captures(sheet_url).and_then(|caps| caps.get(1)) {
            url.push_str("&gid=");
            url.push_str(gid.as_str());
        }
        Ok(url)
    }

    /// Download a Google Sheet as CSV bytes.
    pub fn fetch_sheet(&self, sheet_url: &str) -> SourceResult<Vec<u8>> {
        let url = Self::export_url(sheet_url, self.sheet_name.as_deref())?;
        self.fetch_csv(&url)
    }

    /// Download CSV bytes from an export URL.
    pub fn fetch_csv(&self, url: &str) -> SourceResult<Vec<u8>> {
        let timer = FetchTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", url);

        match self.download(url) {
            Ok(bytes) => {
                tracing::info!(bytes = bytes.len(), "Downloaded sheet export");
                timer.complete(bytes.len());
                Ok(bytes)
            }
            Err(e) => {
                tracing::error!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
                Err(e)
            }
        }
    }

    fn download(&self, url: &str) -> SourceResult<Vec<u8>> {
        let response = self.agent.get(url).call().map_err(Self::map_error)?;

        // Private sheets answer 200 with a sign-in page instead of CSV.
        if response.content_type() == "text/html" {
            return Err(SourceError::ApiError {
                status: response.status(),
                message: "expected CSV but received an HTML page; is the sheet shared publicly?"
                    .to_string(),
            });
        }

        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Map a ureq error to a SourceError.
    fn map_error(error: ureq::Error) -> SourceError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => SourceError::NotFound(message),
                    _ => SourceError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    SourceError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Io => SourceError::Timeout,
                ureq::ErrorKind::InvalidUrl => SourceError::InvalidUrl(transport.to_string()),
                _ => SourceError::HttpError(transport.to_string()),
            },
        }
    }
}
