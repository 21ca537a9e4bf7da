//! Batch-wise runs against scripted sources.

mod mocks;

use leads_sms_converter::error::PipelineError;
use leads_sms_converter::{
    ContactSink, CsvContactSink, LeadsPipeline, Metrics, Notice, PipelineOptions, RawRecord,
};
use mocks::MockLeadSource;

const HEADER: [&str; 4] = ["FirstName", "Phone 1", "Phone Type 1", "Email 1"];

fn lead(name: &str, phone: &str, phone_type: &str, email: &str) -> RawRecord {
    let mut record = RawRecord::new();
    for (column, value) in [
        ("firstname", name),
        ("phone 1", phone),
        ("phone type 1", phone_type),
        ("email 1", email),
    ] {
        if !value.is_empty() {
            record.insert(column, value);
        }
    }
    record
}

#[test]
fn test_batches_are_concatenated_in_order() {
    let mut source = MockLeadSource::new()
        .with_batch(
            &HEADER,
            vec![
                lead("a", "1", "wireless", ""),
                lead("b", "2", "landline", ""),
            ],
        )
        .with_batch(&HEADER, vec![lead("c", "", "", "c@x.com")])
        .with_batch(&HEADER, vec![lead("d", "4", "voip", "d@x.com")]);

    let output = LeadsPipeline::default().run(&mut source).unwrap();

    let names: Vec<&str> = output
        .contacts
        .iter()
        .map(|c| c.first_name.as_str())
        .collect();
    assert_eq!(names, ["a", "c", "d"]);
    assert!(output.notices.is_empty());
    // Three batches plus the call that saw the end of input.
    assert_eq!(source.calls(), 4);
}

#[test]
fn test_roles_come_from_first_batch() {
    let renamed = ["Name", "Mobile", "Kind", "Mail"];
    let mut source = MockLeadSource::new()
        .with_batch(&HEADER, vec![lead("a", "1", "wireless", "")])
        .with_batch(&renamed, vec![lead("b", "2", "wireless", "")]);

    let output = LeadsPipeline::default().run(&mut source).unwrap();

    // The second batch is still read with the first header's columns.
    assert_eq!(output.contacts.len(), 2);
    assert_eq!(output.notices, [Notice::HeaderChanged { batch: 1 }]);
}

#[test]
fn test_header_differing_only_in_case_is_not_a_change() {
    let shouting = ["FIRSTNAME", "PHONE 1", "PHONE TYPE 1", "EMAIL 1"];
    let mut source = MockLeadSource::new()
        .with_batch(&HEADER, vec![lead("a", "1", "wireless", "")])
        .with_batch(&shouting, vec![lead("b", "2", "wireless", "")]);

    let output = LeadsPipeline::default().run(&mut source).unwrap();
    assert!(output.notices.is_empty());
}

#[test]
fn test_source_failure_returns_no_output() {
    let mut source = MockLeadSource::new()
        .with_batch(&HEADER, vec![lead("a", "1", "wireless", "")])
        .with_failure("connection reset");

    let result = LeadsPipeline::default().run(&mut source);

    match result {
        Err(PipelineError::SourceUnavailable(e)) => {
            assert!(e.to_string().contains("connection reset"));
        }
        other => panic!("expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_empty_source_yields_empty_output() {
    let mut source = MockLeadSource::new();
    let output = LeadsPipeline::default().run(&mut source).unwrap();
    assert!(output.contacts.is_empty());
    assert!(output.notices.is_empty());
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_run_into_streams_each_batch_to_sink() {
    let mut source = MockLeadSource::new()
        .with_batch(&HEADER, vec![lead("a", "1", "wireless", "a@x.com")])
        .with_batch(&HEADER, vec![lead("b", "", "", "b@x.com")]);
    let mut sink = CsvContactSink::new(Vec::new()).unwrap();

    let metrics = Metrics::new();
    let pipeline = LeadsPipeline::with_metrics(PipelineOptions::default(), metrics.clone());
    let report = pipeline.run_into(&mut source, &mut sink).unwrap();

    assert_eq!(report.batches, 2);
    assert_eq!(report.records, 2);
    assert_eq!(report.contacts, 2);
    assert_eq!(sink.written(), 2);
    assert_eq!(metrics.batches_total(), 2);
    assert_eq!(metrics.contacts_emitted_total(), 2);

    let csv = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(
        csv,
        "First Name,Last Name,Email,Mobile Phone,Address,City,State,Zip Code\n\
         a,,a@x.com,1,,,,\n\
         b,,b@x.com,,,,,\n"
    );
}

#[test]
fn test_run_into_failure_leaves_partial_sink() {
    let mut source = MockLeadSource::new()
        .with_batch(&HEADER, vec![lead("a", "1", "wireless", "")])
        .with_failure("timed out");
    let mut sink = CsvContactSink::new(Vec::new()).unwrap();

    let result = LeadsPipeline::default().run_into(&mut source, &mut sink);

    assert!(matches!(result, Err(PipelineError::SourceUnavailable(_))));
    // The first batch already reached the sink; callers must discard it.
    assert_eq!(sink.written(), 1);
}

struct RejectingSink;

impl ContactSink for RejectingSink {
    fn write_contacts(
        &mut self,
        _contacts: &[leads_sms_converter::NormalizedContact],
    ) -> leads_sms_converter::error::SinkResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full").into())
    }

    fn finish(&mut self) -> leads_sms_converter::error::SinkResult<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_reported() {
    let mut source =
        MockLeadSource::new().with_batch(&HEADER, vec![lead("a", "1", "wireless", "")]);

    let result = LeadsPipeline::default().run_into(&mut source, &mut RejectingSink);
    assert!(matches!(result, Err(PipelineError::SinkFailed(_))));
}
