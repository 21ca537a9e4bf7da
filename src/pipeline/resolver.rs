//! Column resolution: header cells to semantic roles.

use crate::domain::{normalize_column_name, ColumnRoleSet};
use std::collections::HashSet;

const PHONE_TYPE_PREFIX: &str = "phone type";
const PHONE_PREFIX: &str = "phone";
const EMAIL_MARKER: &str = "email";

/// Scalar roles matched by exact normalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarRole {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Postal,
}

fn scalar_role(name: &str) -> Option<ScalarRole> {
    match name {
        "firstname" => Some(ScalarRole::FirstName),
        "lastname" => Some(ScalarRole::LastName),
        "propertyaddress" => Some(ScalarRole::Address),
        "propertycity" => Some(ScalarRole::City),
        "propertystate" => Some(ScalarRole::State),
        "propertypostalcode" => Some(ScalarRole::Postal),
        _ => None,
    }
}

/// Classify header columns into a [`ColumnRoleSet`].
///
/// Matching is case and whitespace insensitive. Each column claims at most
/// one role, checked in this order: phone type (`"phone type"` prefix), phone
/// (`"phone"` prefix), email (contains `"email"`), then the exact-name alias
/// table for names and address fields. Phone and phone-type columns are
/// truncated to the shorter of the two lists so every phone has exactly one
/// type column.
///
/// Never fails: an empty or unrecognizable header yields an empty role set.
pub fn resolve<I, S>(header: I) -> ColumnRoleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roles = ColumnRoleSet::default();
    let mut seen: HashSet<String> = HashSet::new();

    for cell in header {
        let name = normalize_column_name(cell.as_ref());
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            if !roles.duplicate_columns.contains(&name) {
                roles.duplicate_columns.push(name);
            }
            continue;
        }

        if name.starts_with(PHONE_TYPE_PREFIX) {
            roles.phone_type_columns.push(name);
        } else if name.starts_with(PHONE_PREFIX) {
            roles.phone_columns.push(name);
        } else if name.contains(EMAIL_MARKER) {
            roles.email_columns.push(name);
        } else if let Some(role) = scalar_role(&name) {
            let slot = match role {
                ScalarRole::FirstName => &mut roles.names.first,
                ScalarRole::LastName => &mut roles.names.last,
                ScalarRole::Address => &mut roles.address.address,
                ScalarRole::City => &mut roles.address.city,
                ScalarRole::State => &mut roles.address.state,
                ScalarRole::Postal => &mut roles.address.postal,
            };
            *slot = Some(name);
        }
    }

    align_phone_columns(&mut roles);

    tracing::debug!(
        phone_slots = roles.phone_columns.len(),
        email_columns = roles.email_columns.len(),
        truncated = roles.was_truncated(),
        "Resolved header columns"
    );

    roles
}

fn align_phone_columns(roles: &mut ColumnRoleSet) {
    let aligned = roles
        .phone_columns
        .len()
        .min(roles.phone_type_columns.len());
    roles.dropped_phone_columns = roles.phone_columns.split_off(aligned);
    roles.dropped_phone_type_columns = roles.phone_type_columns.split_off(aligned);
}
