//! Output assembly.

use crate::domain::NormalizedContact;

/// The ordered output of a pipeline run.
///
/// Always valid, even when empty: an empty list still has the fixed header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Vec<NormalizedContact>,
}

impl ContactList {
    pub fn contacts(&self) -> &[NormalizedContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedContact> {
        self.contacts.iter()
    }

    /// Append another list after this one.
    pub fn append(&mut self, other: ContactList) {
        self.contacts.extend(other.contacts);
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a NormalizedContact;
    type IntoIter = std::slice::Iter<'a, NormalizedContact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

/// Concatenate per-record expansions, preserving record order and the
/// expansion order within each record.
pub fn assemble<I>(expansions: I) -> ContactList
where
    I: IntoIterator<Item = Vec<NormalizedContact>>,
{
    ContactList {
        contacts: expansions.into_iter().flatten().collect(),
    }
}
