//! Non-fatal diagnostics collected during a run.

use crate::domain::ColumnRoleSet;
use std::fmt;

/// A recoverable anomaly reported alongside the pipeline result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Phone and phone-type column counts differed; the surplus was dropped.
    PhoneColumnMismatch {
        phone_columns: usize,
        phone_type_columns: usize,
        dropped: Vec<String>,
    },

    /// The header has no usable phone slot and no email column, so no
    /// contacts can be produced.
    NoContactColumns,

    /// A header name appeared more than once after normalization; only the
    /// first occurrence is used.
    DuplicateColumn(String),

    /// A later batch arrived with a different header than the first one.
    /// It was still read with the roles resolved from the first header.
    HeaderChanged { batch: usize },
}

impl Notice {
    /// Diagnostics implied by a resolved header.
    pub fn for_roles(roles: &ColumnRoleSet) -> Vec<Notice> {
        let mut notices = Vec::new();

        if roles.was_truncated() {
            let dropped: Vec<String> = roles
                .dropped_phone_columns()
                .iter()
                .chain(roles.dropped_phone_type_columns())
                .cloned()
                .collect();
            notices.push(Notice::PhoneColumnMismatch {
                phone_columns: roles.phone_columns().len() + roles.dropped_phone_columns().len(),
                phone_type_columns: roles.phone_type_columns().len()
                    + roles.dropped_phone_type_columns().len(),
                dropped,
            });
        }

        notices.extend(
            roles
                .duplicate_columns()
                .iter()
                .cloned()
                .map(Notice::DuplicateColumn),
        );

        if !roles.has_contact_columns() {
            notices.push(Notice::NoContactColumns);
        }

        notices
    }

    /// Emit the notice through `tracing`.
    pub fn log(&self) {
        tracing::warn!("{}", self);
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PhoneColumnMismatch {
                phone_columns,
                phone_type_columns,
                dropped,
            } => write!(
                f,
                "Found {} phone columns but {} phone type columns; ignoring {}",
                phone_columns,
                phone_type_columns,
                dropped.join(", ")
            ),
            Notice::NoContactColumns => {
                write!(f, "No phone/phone type pairs or email columns found in header")
            }
            Notice::DuplicateColumn(name) => {
                write!(f, "Column '{}' appears more than once; using the first", name)
            }
            Notice::HeaderChanged { batch } => write!(
                f,
                "Batch {} has a different header than the first batch; keeping the original columns",
                batch
            ),
        }
    }
}
