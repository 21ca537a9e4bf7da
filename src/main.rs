//! Leads SMS Converter - Main entry point
//!
//! Reads a leads export (a local CSV file or a Google Sheets URL), normalizes
//! it, and writes the SMS contact list as CSV.

use anyhow::{Context, Result};
use leads_sms_converter::client::is_remote;
use leads_sms_converter::{
    AsyncSheetClient, AsyncSheetClientImpl, Config, CsvContactSink, CsvLeadSource, LeadSource,
    LeadsPipeline, Metrics, SheetClient,
};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout stays free for piping)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();
    let pipeline = LeadsPipeline::with_metrics(config.pipeline_options()?, metrics.clone());
    info!(
        phone_types = %pipeline.options().line_types(),
        batch_size = config.batch_size,
        "Starting conversion of {}",
        config.input
    );

    let mut source: Box<dyn LeadSource> = if is_remote(&config.input) {
        let client = SheetClient::new(&config).with_metrics(metrics.clone());
        let client = AsyncSheetClientImpl::new(client);
        let bytes = client
            .fetch_sheet(&config.input)
            .await
            .context("Failed to fetch data from the URL")?;
        Box::new(CsvLeadSource::from_bytes(bytes, config.batch_size)?)
    } else {
        Box::new(
            CsvLeadSource::from_path(&config.input, config.batch_size)
                .with_context(|| format!("Failed to open {}", config.input))?,
        )
    };

    // Write next to the target and rename on success so a failed run never
    // leaves a file that looks complete.
    let partial_path = format!("{}.partial", config.output_path);
    let file = File::create(&partial_path)
        .with_context(|| format!("Failed to create {}", partial_path))?;
    let mut sink = CsvContactSink::new(BufWriter::new(file))?;

    let report = match pipeline.run_into(&mut *source, &mut sink) {
        Ok(report) => report,
        Err(e) => {
            error!("Conversion failed: {}", e);
            drop(sink);
            if let Err(cleanup) = fs::remove_file(&partial_path) {
                warn!("Could not remove {}: {}", partial_path, cleanup);
            }
            return Err(e.into());
        }
    };
    drop(sink);
    fs::rename(&partial_path, &config.output_path)
        .with_context(|| format!("Failed to move output to {}", config.output_path))?;

    let summary = metrics.summary();
    info!(
        records = summary.records_read_total,
        skipped = summary.records_skipped_total,
        contacts = summary.contacts_emitted_total,
        batches = summary.batches_total,
        notices = report.notices.len(),
        bytes_fetched = summary.bytes_fetched_total,
        "Wrote {} contacts to {}",
        report.contacts,
        config.output_path
    );

    Ok(())
}
