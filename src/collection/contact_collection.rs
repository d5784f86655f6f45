//! A single named address book.

use crate::domain::IdentityKey;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, ContactUpdate};
use crate::query::{self, SortKey};
use crate::validation;
use tracing::{debug, warn};

/// An ordered, de-duplicated set of validated contacts.
///
/// Contacts keep insertion order until [`sort_in_place`](Self::sort_in_place)
/// is called. No two stored contacts share an [`IdentityKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCollection {
    name: String,
    contacts: Vec<Contact>,
    capacity_limit: Option<usize>,
}

impl ContactCollection {
    /// Create an empty, unbounded collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
            capacity_limit: None,
        }
    }

    /// Limit the number of contacts this collection accepts.
    pub fn with_capacity_limit(mut self, limit: Option<usize>) -> Self {
        self.capacity_limit = limit;
        self
    }

    /// The book name this collection is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured contact limit, if any.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Add a new contact.
    ///
    /// # Errors
    ///
    /// - `DuplicateContact` if a contact with the same first and last name exists
    /// - `Validation` if any field breaks its rule
    /// - `CapacityExceeded` if the collection is full
    ///
    /// The collection is unchanged on every error.
    pub fn add(&mut self, candidate: Contact) -> DirectoryResult<&Contact> {
        if self.position(&candidate.first_name, &candidate.last_name).is_some() {
            let identity = candidate.identity();
            warn!(book = %self.name, identity = %identity, "Rejected duplicate contact");
            return Err(DirectoryError::DuplicateContact { identity });
        }

        if let Err(violation) = validation::validate(&candidate) {
            warn!(
                book = %self.name,
                field = %violation.field(),
                "Rejected invalid contact"
            );
            return Err(violation.into());
        }

        if let Some(limit) = self.capacity_limit {
            if self.contacts.len() >= limit {
                return Err(DirectoryError::CapacityExceeded {
                    name: self.name.clone(),
                    limit,
                });
            }
        }

        debug!(book = %self.name, identity = %candidate.identity(), "Contact added");
        self.contacts.push(candidate);
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    /// Find the contact with the given first and last name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such contact exists.
    pub fn find(&self, first_name: &str, last_name: &str) -> DirectoryResult<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.has_identity(first_name, last_name))
            .ok_or_else(|| Self::not_found(first_name, last_name))
    }

    /// Apply a partial update to an existing contact.
    ///
    /// The merged record is revalidated before it replaces the stored one. If
    /// the update renames the contact onto another stored contact's identity,
    /// the edit is rejected as a duplicate.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has the given name
    /// - `DuplicateContact` if the new name belongs to a different contact
    /// - `Validation` if the merged record breaks a field rule
    ///
    /// The stored contact is untouched on every error.
    pub fn edit(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> DirectoryResult<&Contact> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| Self::not_found(first_name, last_name))?;

        let merged = update.merge_into(&self.contacts[index]);

        if let Some(other) = self.position(&merged.first_name, &merged.last_name) {
            if other != index {
                let identity = merged.identity();
                warn!(
                    book = %self.name,
                    identity = %identity,
                    "Edit collides with existing contact"
                );
                return Err(DirectoryError::DuplicateContact { identity });
            }
        }

        if let Err(violation) = validation::validate(&merged) {
            warn!(
                book = %self.name,
                field = %violation.field(),
                "Rejected invalid edit"
            );
            return Err(violation.into());
        }

        debug!(
            book = %self.name,
            identity = %merged.identity(),
            "Contact edited"
        );
        self.contacts[index] = merged;
        Ok(&self.contacts[index])
    }

    /// Remove and return the contact with the given first and last name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such contact exists; nothing is removed.
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> DirectoryResult<Contact> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| Self::not_found(first_name, last_name))?;

        let removed = self.contacts.remove(index);
        debug!(book = %self.name, identity = %removed.identity(), "Contact deleted");
        Ok(removed)
    }

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Stored contacts in current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// An owned copy of the current contents.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Re-sort the stored contacts so the new order persists.
    pub fn sort_in_place(&mut self, key: SortKey) {
        query::sort_slice(&mut self.contacts, key);
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.has_identity(first_name, last_name))
    }

    fn not_found(first_name: &str, last_name: &str) -> DirectoryError {
        DirectoryError::NotFound {
            identity: IdentityKey::new(first_name, last_name),
        }
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
