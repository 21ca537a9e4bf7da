//! Performance benchmarks for the normalization pipeline.
//!
//! These benchmarks measure:
//! - In-memory processing at different table sizes
//! - Batch size effects when streaming a CSV source
//! - CSV serialization of the contact list

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use leads_sms_converter::{CsvLeadSource, LeadsPipeline, RawRecord};
use std::hint::black_box;
use std::time::Duration;

const HEADER: [&str; 12] = [
    "FirstName",
    "LastName",
    "Phone 1",
    "Phone Type 1",
    "Phone 2",
    "Phone Type 2",
    "Phone 3",
    "Phone Type 3",
    "Email 1",
    "Email 2",
    "PropertyAddress",
    "PropertyPostalCode",
];

const PHONE_TYPES: [&str; 3] = ["Wireless", "Landline", "VOIP"];

fn create_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let mut record = RawRecord::new();
            record.insert("FirstName", format!("First{i}"));
            record.insert("LastName", format!("Last{i}"));
            for slot in 1..=3 {
                record.insert(format!("Phone {slot}"), format!("555{i:04}{slot}"));
                record.insert(
                    format!("Phone Type {slot}"),
                    PHONE_TYPES[(i + slot) % PHONE_TYPES.len()],
                );
            }
            record.insert("Email 1", format!("lead{i}@example.com"));
            if i % 2 == 0 {
                record.insert("Email 2", format!("lead{i}@work.example.com"));
            }
            record.insert("PropertyAddress", format!("{i} Main St"));
            record.insert("PropertyPostalCode", "02134");
            record
        })
        .collect()
}

fn create_csv(count: usize) -> Vec<u8> {
    let mut csv = HEADER.join(",");
    csv.push('\n');
    for i in 0..count {
        csv.push_str(&format!(
            "First{i},Last{i},555{i:04}1,Wireless,555{i:04}2,Landline,555{i:04}3,VOIP,lead{i}@example.com,,{i} Main St,02134\n"
        ));
    }
    csv.into_bytes()
}

/// Benchmark in-memory processing with different table sizes.
fn bench_process_table(c: &mut Criterion) {
    let pipeline = LeadsPipeline::default();
    let mut group = c.benchmark_group("process_table");

    for size in [100, 1_000, 10_000].iter() {
        let records = create_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(pipeline.process_table(&HEADER, records)));
        });
    }

    group.finish();
}

/// Benchmark streaming a CSV source with different batch sizes.
fn bench_csv_batch_sizes(c: &mut Criterion) {
    let pipeline = LeadsPipeline::default();
    let csv = create_csv(10_000);
    let mut group = c.benchmark_group("csv_batch_size");

    for batch_size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    let mut source = CsvLeadSource::from_bytes(csv.clone(), batch_size).unwrap();
                    black_box(pipeline.run(&mut source).unwrap())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark CSV serialization of the assembled contact list.
fn bench_to_csv(c: &mut Criterion) {
    let output = LeadsPipeline::default().process_table(&HEADER, &create_records(10_000));

    c.bench_function("contacts_to_csv", |b| {
        b.iter(|| black_box(output.contacts.to_csv_bytes().unwrap()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_process_table, bench_csv_batch_sizes, bench_to_csv
}

criterion_main!(benches);
