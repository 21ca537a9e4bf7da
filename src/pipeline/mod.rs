//! The lead normalization pipeline.
//!
//! Four stages, strictly forward: the [`resolve`] step classifies header
//! columns once, [`extract_phones`] and [`extract_emails`] pick candidates
//! from each record, [`expand`] turns one record into contacts, and
//! [`assemble`] concatenates the results in input order.
//!
//! [`LeadsPipeline`] drives the stages over a [`LeadSource`], resolving the
//! header from the first batch only and reusing those roles for every later
//! batch.

mod assembler;
mod diagnostics;
mod expander;
mod extractor;
mod resolver;

pub use assembler::{assemble, ContactList};
pub use diagnostics::Notice;
pub use expander::expand;
pub use extractor::{extract_emails, extract_phones};
pub use resolver::resolve;

use crate::domain::{
    normalize_column_name, ColumnRoleSet, LineTypeFilter, NormalizedContact, RawRecord,
};
use crate::error::PipelineResult;
use crate::metrics::Metrics;
use crate::sink::ContactSink;
use crate::source::LeadSource;

/// Business rules applied while extracting candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    line_types: LineTypeFilter,
}

impl PipelineOptions {
    pub fn new(line_types: LineTypeFilter) -> Self {
        Self { line_types }
    }

    /// Phone type filter deciding which numbers qualify for SMS.
    pub fn line_types(&self) -> &LineTypeFilter {
        &self.line_types
    }
}

/// Result of an in-memory run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Contacts in input order.
    pub contacts: ContactList,

    /// Recoverable anomalies seen during the run.
    pub notices: Vec<Notice>,
}

/// Result of a streaming run whose contacts went straight to a sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub batches: usize,
    pub records: usize,
    pub contacts: usize,
    pub notices: Vec<Notice>,
}

/// Header and roles fixed by the first batch of a run.
struct ActiveRoles {
    header: Vec<String>,
    roles: ColumnRoleSet,
}

/// Converts lead records into normalized contacts.
pub struct LeadsPipeline {
    options: PipelineOptions,
    metrics: Metrics,
}

impl LeadsPipeline {
    /// Create a pipeline with its own metrics collector.
    pub fn new(options: PipelineOptions) -> Self {
        Self::with_metrics(options, Metrics::new())
    }

    /// Create a pipeline that reports into an existing metrics collector.
    pub fn with_metrics(options: PipelineOptions, metrics: Metrics) -> Self {
        Self { options, metrics }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run one record through extraction and expansion.
    pub fn process_record(
        &self,
        record: &RawRecord,
        roles: &ColumnRoleSet,
    ) -> Vec<NormalizedContact> {
        let phones = extract_phones(record, roles, self.options.line_types());
        let emails = extract_emails(record, roles);
        expand(record, roles, &phones, &emails)
    }

    /// Process a batch of records against already-resolved roles.
    pub fn process_batch(&self, records: &[RawRecord], roles: &ColumnRoleSet) -> ContactList {
        let expansions: Vec<Vec<NormalizedContact>> = records
            .iter()
            .map(|record| self.process_record(record, roles))
            .collect();
        let skipped = expansions.iter().filter(|rows| rows.is_empty()).count();

        let contacts = assemble(expansions);
        self.metrics
            .record_batch(records.len(), skipped, contacts.len());
        tracing::debug!(
            records = records.len(),
            skipped = skipped,
            contacts = contacts.len(),
            "Processed batch"
        );
        contacts
    }

    /// Process a complete table held in memory.
    pub fn process_table<S: AsRef<str>>(
        &self,
        header: &[S],
        records: &[RawRecord],
    ) -> PipelineOutput {
        let roles = resolve(header);
        let notices = Notice::for_roles(&roles);
        for notice in &notices {
            notice.log();
        }

        PipelineOutput {
            contacts: self.process_batch(records, &roles),
            notices,
        }
    }

    /// Drain a source and collect every contact in memory.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::SourceUnavailable` if any batch cannot be
    /// read; contacts from earlier batches are discarded.
    pub fn run(&self, source: &mut dyn LeadSource) -> PipelineResult<PipelineOutput> {
        let mut contacts = ContactList::default();
        let report = self.drive(source, |batch| {
            contacts.append(batch);
            Ok(())
        })?;

        Ok(PipelineOutput {
            contacts,
            notices: report.notices,
        })
    }

    /// Drain a source, writing each batch's contacts to `sink` as soon as
    /// the batch is processed.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::SourceUnavailable` or
    /// `PipelineError::SinkFailed`. On error the sink may hold a partial
    /// result, which must not be treated as complete.
    pub fn run_into(
        &self,
        source: &mut dyn LeadSource,
        sink: &mut dyn ContactSink,
    ) -> PipelineResult<RunReport> {
        let report = self.drive(source, |batch| {
            sink.write_contacts(batch.contacts())?;
            Ok(())
        })?;
        sink.finish()?;
        Ok(report)
    }

    fn drive<F>(&self, source: &mut dyn LeadSource, mut emit: F) -> PipelineResult<RunReport>
    where
        F: FnMut(ContactList) -> PipelineResult<()>,
    {
        let mut report = RunReport::default();
        let mut active: Option<ActiveRoles> = None;

        while let Some(batch) = source.next_batch()? {
            let batch_index = report.batches;
            report.batches += 1;

            let header: Vec<String> = batch
                .header
                .iter()
                .map(|cell| normalize_column_name(cell))
                .collect();

            let current = match active.take() {
                Some(current) => {
                    if current.header != header {
                        let notice = Notice::HeaderChanged { batch: batch_index };
                        notice.log();
                        report.notices.push(notice);
                    }
                    current
                }
                None => {
                    let roles = resolve(&batch.header);
                    for notice in Notice::for_roles(&roles) {
                        notice.log();
                        report.notices.push(notice);
                    }
                    ActiveRoles { header, roles }
                }
            };

            let contacts = self.process_batch(&batch.records, &current.roles);
            report.records += batch.records.len();
            report.contacts += contacts.len();
            emit(contacts)?;

            active = Some(current);
        }

        tracing::info!(
            batches = report.batches,
            records = report.records,
            contacts = report.contacts,
            notices = report.notices.len(),
            "Pipeline run complete"
        );
        Ok(report)
    }
}

impl Default for LeadsPipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_table_scenario() {
        let header = [
            "firstname",
            "phone1",
            "phone type1",
            "phone2",
            "phone type2",
            "email1",
            "email2",
            "propertyaddress",
        ];
        let record = RawRecord::from_pairs([
            ("firstname", "Ana"),
            ("phone1", "5551"),
            ("phone type1", "wireless"),
            ("phone2", "5552"),
            ("phone type2", "landline"),
            ("email1", "a@x.com"),
            ("email2", "b@x.com"),
            ("propertyaddress", "12 Elm"),
        ]);

        let output = LeadsPipeline::default().process_table(&header, &[record]);
        assert!(output.notices.is_empty());

        let rows = output.contacts.contacts();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_name, "Ana");
        assert_eq!(rows[0].mobile_phone, "5551");
        assert_eq!(rows[0].email, "a@x.com");
        assert_eq!(rows[0].address, "12 Elm");
        assert_eq!(rows[1].first_name, "Ana");
        assert_eq!(rows[1].mobile_phone, "");
        assert_eq!(rows[1].email, "b@x.com");
        assert_eq!(rows[1].address, "12 Elm");
    }

    #[test]
    fn test_process_batch_updates_metrics() {
        let pipeline = LeadsPipeline::default();
        let roles = resolve(["email"]);
        let records = [
            RawRecord::from_pairs([("email", "a@x.com")]),
            RawRecord::new(),
            RawRecord::from_pairs([("email", "b@x.com")]),
        ];

        let contacts = pipeline.process_batch(&records, &roles);
        assert_eq!(contacts.len(), 2);

        let summary = pipeline.metrics().summary();
        assert_eq!(summary.batches_total, 1);
        assert_eq!(summary.records_read_total, 3);
        assert_eq!(summary.records_skipped_total, 1);
        assert_eq!(summary.contacts_emitted_total, 2);
    }

    #[test]
    fn test_unrecognized_header_yields_empty_output() {
        let output = LeadsPipeline::default().process_table(
            &["id", "notes"],
            &[RawRecord::from_pairs([("id", "1"), ("notes", "call later")])],
        );
        assert!(output.contacts.is_empty());
        assert_eq!(output.notices, [Notice::NoContactColumns]);
    }

    #[test]
    fn test_untyped_option_changes_qualification() {
        let header = ["phone 1", "phone type 1"];
        let records = [RawRecord::from_pairs([("phone 1", "5551")])];

        let strict = LeadsPipeline::default().process_table(&header, &records);
        assert!(strict.contacts.is_empty());

        let options = PipelineOptions::new(LineTypeFilter::default().with_untyped(true));
        let lenient = LeadsPipeline::new(options).process_table(&header, &records);
        assert_eq!(lenient.contacts.len(), 1);
        assert_eq!(lenient.contacts.contacts()[0].mobile_phone, "5551");
    }
}
