//! Registry of named address books.

use crate::collection::ContactCollection;
use crate::config::Config;
use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::{DirectoryMetrics, Mutation};
use crate::models::{Contact, ContactUpdate};
use crate::query::{self, FilterField, SortKey};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// A contact found by a cross-book search, tagged with its book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub book: String,
    pub contact: Contact,
}

/// Owner of every named [`ContactCollection`].
///
/// Books exist only after [`create_book`](Self::create_book); every per-book
/// operation on an unregistered name fails with `BookNotFound`.
#[derive(Debug, Default)]
pub struct AddressBookRegistry {
    books: BTreeMap<String, ContactCollection>,
    max_contacts_per_book: Option<usize>,
    metrics: DirectoryMetrics,
}

impl AddressBookRegistry {
    /// Create an empty registry with no contact limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the configured limit and default books.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            max_contacts_per_book: config.max_contacts_per_book,
            ..Self::default()
        };
        for name in &config.default_books {
            if let Err(e) = registry.create_book(name) {
                tracing::warn!(book = %name, error = %e, "Skipping default book");
            }
        }
        registry
    }

    /// Register an empty book under `name`.
    ///
    /// # Errors
    ///
    /// - `InvalidBookName` if `name` is empty or only whitespace
    /// - `AlreadyExists` if the name is taken; the existing book is untouched
    pub fn create_book(&mut self, name: &str) -> DirectoryResult<()> {
        validate_book_name(name)?;
        if self.books.contains_key(name) {
            return Err(DirectoryError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let collection =
            ContactCollection::new(name).with_capacity_limit(self.max_contacts_per_book);
        self.books.insert(name.to_string(), collection);
        self.metrics.record_book_created();
        info!(book = %name, "Address book created");
        Ok(())
    }

    /// Unregister a book, returning its final contents.
    pub fn delete_book(&mut self, name: &str) -> DirectoryResult<ContactCollection> {
        let removed = self.books.remove(name).ok_or_else(|| book_not_found(name))?;
        self.metrics.record_book_deleted();
        info!(book = %name, contacts = removed.count(), "Address book deleted");
        Ok(removed)
    }

    pub fn contains_book(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    /// Registered book names, sorted.
    pub fn book_names(&self) -> Vec<String> {
        self.books.keys().cloned().collect()
    }

    /// Read access to one book.
    pub fn book(&self, name: &str) -> DirectoryResult<&ContactCollection> {
        self.books.get(name).ok_or_else(|| book_not_found(name))
    }

    pub fn add_contact(&mut self, name: &str, candidate: Contact) -> DirectoryResult<Contact> {
        let outcome = book_mut(&mut self.books, name)?.add(candidate).cloned();
        self.metrics.record(Mutation::Add, &outcome);
        outcome
    }

    pub fn find_contact(
        &self,
        name: &str,
        first_name: &str,
        last_name: &str,
    ) -> DirectoryResult<&Contact> {
        self.book(name)?.find(first_name, last_name)
    }

    pub fn edit_contact(
        &mut self,
        name: &str,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> DirectoryResult<Contact> {
        let outcome = book_mut(&mut self.books, name)?
            .edit(first_name, last_name, update)
            .cloned();
        self.metrics.record(Mutation::Edit, &outcome);
        outcome
    }

    pub fn delete_contact(
        &mut self,
        name: &str,
        first_name: &str,
        last_name: &str,
    ) -> DirectoryResult<Contact> {
        let outcome = book_mut(&mut self.books, name)?.delete(first_name, last_name);
        self.metrics.record(Mutation::Delete, &outcome);
        outcome
    }

    pub fn count_contacts(&self, name: &str) -> DirectoryResult<usize> {
        Ok(self.book(name)?.count())
    }

    /// All contacts of a book in stored order.
    pub fn list_contacts(&self, name: &str) -> DirectoryResult<&[Contact]> {
        Ok(self.book(name)?.contacts())
    }

    pub fn filter_contacts(
        &self,
        name: &str,
        field: FilterField,
        value: &str,
    ) -> DirectoryResult<Vec<Contact>> {
        Ok(query::filter_by_field(self.book(name)?.contacts(), field, value))
    }

    /// A sorted copy of a book; the stored order is unchanged.
    pub fn sort_contacts(&self, name: &str, key: SortKey) -> DirectoryResult<Vec<Contact>> {
        Ok(query::sort_by(self.book(name)?.contacts(), key))
    }

    /// Re-sort a book so the new order persists.
    pub fn sort_book(&mut self, name: &str, key: SortKey) -> DirectoryResult<()> {
        book_mut(&mut self.books, name)?.sort_in_place(key);
        Ok(())
    }

    pub fn count_by_field(
        &self,
        name: &str,
        field: FilterField,
    ) -> DirectoryResult<BTreeMap<String, usize>> {
        Ok(query::count_by_field(self.book(name)?.contacts(), field))
    }

    /// Contacts matching `field == value` across every book, in book-name order.
    pub fn search_all(&self, field: FilterField, value: &str) -> Vec<BookEntry> {
        self.books
            .iter()
            .flat_map(|(book, collection)| {
                query::filter_by_field(collection.contacts(), field, value)
                    .into_iter()
                    .map(move |contact| BookEntry {
                        book: book.clone(),
                        contact,
                    })
            })
            .collect()
    }

    pub fn metrics(&self) -> &DirectoryMetrics {
        &self.metrics
    }
}

fn book_mut<'a>(
    books: &'a mut BTreeMap<String, ContactCollection>,
    name: &str,
) -> DirectoryResult<&'a mut ContactCollection> {
    books.get_mut(name).ok_or_else(|| book_not_found(name))
}

pub(crate) fn book_not_found(name: &str) -> DirectoryError {
    DirectoryError::BookNotFound {
        name: name.to_string(),
    }
}

pub(crate) fn validate_book_name(name: &str) -> DirectoryResult<()> {
    if name.trim().is_empty() {
        return Err(DirectoryError::InvalidBookName {
            name: name.to_string(),
        });
    }
    Ok(())
}
