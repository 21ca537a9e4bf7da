//! Semantic column roles resolved from a leads header.

/// Name columns of a leads export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameColumns {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Postal address columns of a leads export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressColumns {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
}

/// The resolved mapping from semantic role to source column names.
///
/// Built once per input by [`crate::pipeline::resolve`] and shared read-only
/// by every record and batch. Phone and phone-type columns are always of
/// equal length: surplus columns on either side are moved to the `dropped_*`
/// lists during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoleSet {
    pub(crate) names: NameColumns,
    pub(crate) phone_columns: Vec<String>,
    pub(crate) phone_type_columns: Vec<String>,
    pub(crate) email_columns: Vec<String>,
    pub(crate) address: AddressColumns,
    pub(crate) dropped_phone_columns: Vec<String>,
    pub(crate) dropped_phone_type_columns: Vec<String>,
    pub(crate) duplicate_columns: Vec<String>,
}

impl ColumnRoleSet {
    /// First/last name columns.
    pub fn names(&self) -> &NameColumns {
        &self.names
    }

    /// Address columns.
    pub fn address(&self) -> &AddressColumns {
        &self.address
    }

    /// Phone columns in header order, already aligned with the type columns.
    pub fn phone_columns(&self) -> &[String] {
        &self.phone_columns
    }

    /// Phone-type columns in header order, already aligned with the phone columns.
    pub fn phone_type_columns(&self) -> &[String] {
        &self.phone_type_columns
    }

    /// Email columns in header order.
    pub fn email_columns(&self) -> &[String] {
        &self.email_columns
    }

    /// Aligned `(phone column, phone-type column)` pairs.
    pub fn phone_slots(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.phone_columns
            .iter()
            .zip(&self.phone_type_columns)
            .map(|(phone, kind)| (phone.as_str(), kind.as_str()))
    }

    /// Phone columns discarded by alignment.
    pub fn dropped_phone_columns(&self) -> &[String] {
        &self.dropped_phone_columns
    }

    /// Phone-type columns discarded by alignment.
    pub fn dropped_phone_type_columns(&self) -> &[String] {
        &self.dropped_phone_type_columns
    }

    /// Normalized header names that appeared more than once.
    pub fn duplicate_columns(&self) -> &[String] {
        &self.duplicate_columns
    }

    /// Whether any column can yield a contact (a phone slot or an email column).
    pub fn has_contact_columns(&self) -> bool {
        !self.phone_columns.is_empty() || !self.email_columns.is_empty()
    }

    /// Whether alignment had to discard columns.
    pub fn was_truncated(&self) -> bool {
        !self.dropped_phone_columns.is_empty() || !self.dropped_phone_type_columns.is_empty()
    }
}
