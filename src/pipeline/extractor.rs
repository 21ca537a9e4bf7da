//! Per-record candidate extraction.
//!
//! Both functions are pure: they read one record through the shared
//! [`ColumnRoleSet`] and never look at any other record.

use crate::domain::{ColumnRoleSet, EmailAddress, LineTypeFilter, RawRecord};

/// Collect the record's qualifying phone numbers in phone-column order.
///
/// A phone qualifies when its cell holds a non-empty value and the type
/// cell in the same aligned slot passes `filter`. Values are trimmed and
/// not de-duplicated.
pub fn extract_phones(
    record: &RawRecord,
    roles: &ColumnRoleSet,
    filter: &LineTypeFilter,
) -> Vec<String> {
    roles
        .phone_slots()
        .filter_map(|(phone_column, type_column)| {
            let phone = record.get(phone_column)?.as_phone_text()?;
            if phone.is_empty() {
                return None;
            }
            // Non-text tags count as untyped.
            let tag = record.text(type_column);
            filter.accepts(tag).then(|| phone.into_owned())
        })
        .collect()
}

/// Collect the record's email addresses in email-column order, keeping only
/// the first occurrence of each exact value.
pub fn extract_emails(record: &RawRecord, roles: &ColumnRoleSet) -> Vec<EmailAddress> {
    let mut emails: Vec<EmailAddress> = Vec::new();
    for column in roles.email_columns() {
        let Some(email) = record
            .text(column)
            .and_then(|value| EmailAddress::new(value).ok())
        else {
            continue;
        };
        if !emails.contains(&email) {
            emails.push(email);
        }
    }
    emails
}
