//! Sinks: collaborators that serialize normalized contacts.

mod csv_sink;

pub use csv_sink::CsvContactSink;

use crate::domain::NormalizedContact;
use crate::error::SinkResult;

/// Accepts normalized contacts in output order.
///
/// Implementations are expected to emit the fixed output header before any
/// contact, so that a run producing no contacts still yields a valid,
/// header-only table.
pub trait ContactSink {
    /// Write a slice of contacts after everything written so far.
    fn write_contacts(&mut self, contacts: &[NormalizedContact]) -> SinkResult<()>;

    /// Flush any buffered output.
    fn finish(&mut self) -> SinkResult<()>;
}
