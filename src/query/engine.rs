//! Read-only filter and sort operations over contact snapshots.
//!
//! Every function here takes a slice and returns new owned data. None of them
//! touch the collection the slice was taken from.

use crate::domain::ContactField;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Fields a contact list can be filtered or grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    /// Contact city
    City,
    /// Contact state
    State,
}

impl FilterField {
    /// The underlying contact field.
    pub fn field(&self) -> ContactField {
        match self {
            Self::City => ContactField::City,
            Self::State => ContactField::State,
        }
    }
}

/// Orderings a contact list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// First name, ties broken by last name
    Name,
    /// City
    City,
    /// State
    State,
    /// Zip code, compared as text
    Zip,
}

impl SortKey {
    /// Compare two contacts under this key.
    ///
    /// Comparison is byte-wise on the stored text; no locale rules apply.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::Name => a
                .first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name)),
            Self::City => a.city.cmp(&b.city),
            Self::State => a.state.cmp(&b.state),
            Self::Zip => a.zip.cmp(&b.zip),
        }
    }
}

/// Contacts whose `field` equals `value` exactly (case-sensitive), in input order.
pub fn filter_by_field(contacts: &[Contact], field: FilterField, value: &str) -> Vec<Contact> {
    let field = field.field();
    contacts
        .iter()
        .filter(|contact| contact.field(field) == value)
        .cloned()
        .collect()
}

/// A sorted copy of `contacts`.
///
/// The sort is stable: contacts with equal keys keep their input order.
pub fn sort_by(contacts: &[Contact], key: SortKey) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sort_slice(&mut sorted, key);
    sorted
}

/// Stable in-place sort, shared by [`sort_by`] and persistent re-sorts.
pub fn sort_slice(contacts: &mut [Contact], key: SortKey) {
    contacts.sort_by(|a, b| key.compare(a, b));
}

/// Number of contacts per distinct value of `field`.
pub fn count_by_field(contacts: &[Contact], field: FilterField) -> BTreeMap<String, usize> {
    let field = field.field();
    let mut counts = BTreeMap::new();
    for contact in contacts {
        *counts.entry(contact.field(field).to_string()).or_insert(0) += 1;
    }
    counts
}
