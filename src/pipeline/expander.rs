//! Row expansion: one lead record to zero or more contacts.

use crate::domain::{ColumnRoleSet, EmailAddress, NormalizedContact, RawRecord};

/// Expand a record into contacts by positional pairing.
///
/// Emits `max(phones.len(), emails.len())` rows. Row `i` carries `phones[i]`
/// and `emails[i]`, with an empty string where one list has run out. This is
/// a zip with padding, never a cross product. Name and address fields are
/// copied unchanged into every row; a record with no phones and no emails
/// produces nothing.
pub fn expand(
    record: &RawRecord,
    roles: &ColumnRoleSet,
    phones: &[String],
    emails: &[EmailAddress],
) -> Vec<NormalizedContact> {
    let rows = phones.len().max(emails.len());
    if rows == 0 {
        return Vec::new();
    }

    let template = NormalizedContact {
        first_name: scalar(record, roles.names().first.as_deref()),
        last_name: scalar(record, roles.names().last.as_deref()),
        address: scalar(record, roles.address().address.as_deref()),
        city: scalar(record, roles.address().city.as_deref()),
        state: scalar(record, roles.address().state.as_deref()),
        zip_code: scalar(record, roles.address().postal.as_deref()),
        ..Default::default()
    };

    (0..rows)
        .map(|i| NormalizedContact {
            mobile_phone: phones.get(i).cloned().unwrap_or_default(),
            email: emails
                .get(i)
                .map(|e| e.as_str().to_string())
                .unwrap_or_default(),
            ..template.clone()
        })
        .collect()
}

/// Read a scalar field; absent columns and cells become empty strings.
fn scalar(record: &RawRecord, column: Option<&str>) -> String {
    column
        .and_then(|column| record.get(column))
        .map(|cell| cell.to_string())
        .unwrap_or_default()
}
