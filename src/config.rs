//! Configuration management for the leads converter.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional `.env` file loaded through `dotenvy`.

use crate::domain::{LineTypeFilter, DEFAULT_ACCEPTED_LINE_TYPES};
use crate::error::{ConfigError, ConfigResult};
use crate::pipeline::PipelineOptions;
use crate::source::DEFAULT_BATCH_SIZE;
use std::env;

/// Output file name used when `LEADS_OUTPUT` is not set.
pub const DEFAULT_OUTPUT_PATH: &str = "processed_leads.csv";

/// Configuration for the leads converter.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file path or Google Sheets URL
    pub input: String,

    /// Output CSV path (default: "processed_leads.csv")
    pub output_path: String,

    /// Whether phones without a type tag qualify (default: false)
    pub include_untyped_phones: bool,

    /// Phone type tags that qualify for SMS (default: wireless, voip)
    pub accepted_phone_types: Vec<String>,

    /// Records per source batch (default: 1000)
    pub batch_size: usize,

    /// Sheet (tab) name for Google Sheets exports
    pub sheet_name: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `LEADS_INPUT`: CSV file path or Google Sheets URL
    ///
    /// Optional environment variables:
    /// - `LEADS_OUTPUT`: Output CSV path (default: "processed_leads.csv")
    /// - `LEADS_INCLUDE_UNTYPED_PHONES`: Accept phones with no type tag (default: false)
    /// - `LEADS_ACCEPTED_PHONE_TYPES`: Comma-separated type tags (default: "wireless,voip")
    /// - `LEADS_BATCH_SIZE`: Records per batch (default: 1000)
    /// - `LEADS_SHEET_NAME`: Sheet name for Google Sheets exports
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let input = env::var("LEADS_INPUT")
            .map_err(|_| ConfigError::MissingVar("LEADS_INPUT".to_string()))?;

        if input.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LEADS_INPUT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output_path =
            env::var("LEADS_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        let include_untyped_phones = Self::parse_env_bool("LEADS_INCLUDE_UNTYPED_PHONES", false)?;

        let accepted_phone_types = match env::var("LEADS_ACCEPTED_PHONE_TYPES") {
            Ok(val) => Self::parse_list(&val),
            Err(_) => Self::default_phone_types(),
        };
        if accepted_phone_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LEADS_ACCEPTED_PHONE_TYPES".to_string(),
                reason: "Must list at least one phone type".to_string(),
            });
        }

        let batch_size = Self::parse_env_usize("LEADS_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "LEADS_BATCH_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let sheet_name = env::var("LEADS_SHEET_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty());
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            input,
            output_path,
            include_untyped_phones,
            accepted_phone_types,
            batch_size,
            sheet_name,
            request_timeout,
            log_level,
        })
    }

    /// Build pipeline options from this configuration.
    pub fn pipeline_options(&self) -> ConfigResult<PipelineOptions> {
        let filter = LineTypeFilter::new(&self.accepted_phone_types, self.include_untyped_phones)
            .map_err(|e| ConfigError::InvalidValue {
                var: "LEADS_ACCEPTED_PHONE_TYPES".to_string(),
                reason: e.to_string(),
            })?;
        Ok(PipelineOptions::new(filter))
    }

    fn default_phone_types() -> Vec<String> {
        DEFAULT_ACCEPTED_LINE_TYPES
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    /// Split a comma-separated list, dropping blank entries.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: String::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            include_untyped_phones: false,
            accepted_phone_types: Self::default_phone_types(),
            batch_size: DEFAULT_BATCH_SIZE,
            sheet_name: None,
            request_timeout: 30,
            log_level: "info".to_string(),
        }
    }
}
