//! Async wrapper around the synchronous SheetClient.
//!
//! This module provides an async interface to the synchronous SheetClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::SheetClient;
use crate::error::{SourceError, SourceResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for sheet downloads.
#[async_trait]
pub trait AsyncSheetClient: Send + Sync {
    async fn fetch_sheet(&self, sheet_url: &str) -> SourceResult<Vec<u8>>;
    async fn fetch_csv(&self, url: &str) -> SourceResult<Vec<u8>>;
}

/// Async wrapper around synchronous SheetClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncSheetClientImpl {
    client: Arc<SheetClient>,
}

impl AsyncSheetClientImpl {
    pub fn new(client: SheetClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSheetClient for AsyncSheetClientImpl {
    async fn fetch_sheet(&self, sheet_url: &str) -> SourceResult<Vec<u8>> {
        let client = self.client.clone();
        let sheet_url = sheet_url.to_string();

        tokio::task::spawn_blocking(move || client.fetch_sheet(&sheet_url))
            .await
            .map_err(|e| SourceError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn fetch_csv(&self, url: &str) -> SourceResult<Vec<u8>> {
        let client = self.client.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || client.fetch_csv(&url))
            .await
            .map_err(|e| SourceError::HttpError(format!("Task join error: {}", e)))?
    }
}
