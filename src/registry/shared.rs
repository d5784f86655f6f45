//! Thread-safe registry with one lock per address book.
//!
//! The outer lock guards the name → book map. Per-book operations hold it
//! shared for their whole duration, so books proceed independently, while
//! `create_book` and `delete_book` take it exclusively and wait for in-flight
//! operations to finish. Each book has its own `RwLock`, so mutations on the
//! same book are serialized. Filter and sort copy a snapshot under the book's
//! read lock and run after it is released.

use super::address_book_registry::{book_not_found, validate_book_name, BookEntry};
use crate::collection::ContactCollection;
use crate::config::Config;
use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::{DirectoryMetrics, Mutation};
use crate::models::{Contact, ContactUpdate};
use crate::query::{self, FilterField, SortKey};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

type BookHandle = Arc<RwLock<ContactCollection>>;

/// A `Send + Sync` counterpart of
/// [`AddressBookRegistry`](super::AddressBookRegistry).
///
/// Methods take `&self` and return owned values, so the registry can be
/// shared behind an `Arc` across threads.
#[derive(Debug, Default)]
pub struct SharedAddressBookRegistry {
    books: RwLock<BTreeMap<String, BookHandle>>,
    max_contacts_per_book: Option<usize>,
    metrics: DirectoryMetrics,
}

// A panic inside a collection method cannot leave a half-applied mutation
// behind, so poisoned guards are safe to reuse.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl SharedAddressBookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the configured limit and default books.
    pub fn from_config(config: &Config) -> Self {
        let registry = Self {
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
    pub fn create_book(&self, name: &str) -> DirectoryResult<()> {
        validate_book_name(name)?;
        let mut books = write(&self.books);
        if books.contains_key(name) {
            return Err(DirectoryError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let collection =
            ContactCollection::new(name).with_capacity_limit(self.max_contacts_per_book);
        books.insert(name.to_string(), Arc::new(RwLock::new(collection)));
        self.metrics.record_book_created();
        info!(book = %name, "Address book created");
        Ok(())
    }

    /// Unregister a book, returning a copy of its final contents.
    pub fn delete_book(&self, name: &str) -> DirectoryResult<Vec<Contact>> {
        let handle = write(&self.books)
            .remove(name)
            .ok_or_else(|| book_not_found(name))?;
        let contacts = read(&handle).snapshot();
        self.metrics.record_book_deleted();
        info!(book = %name, contacts = contacts.len(), "Address book deleted");
        Ok(contacts)
    }

    pub fn contains_book(&self, name: &str) -> bool {
        read(&self.books).contains_key(name)
    }

    pub fn book_names(&self) -> Vec<String> {
        read(&self.books).keys().cloned().collect()
    }

    pub fn add_contact(&self, name: &str, candidate: Contact) -> DirectoryResult<Contact> {
        let outcome = self.with_book_mut(name, |book| book.add(candidate).cloned())?;
        self.metrics.record(Mutation::Add, &outcome);
        outcome
    }

    pub fn find_contact(
        &self,
        name: &str,
        first_name: &str,
        last_name: &str,
    ) -> DirectoryResult<Contact> {
        self.with_book(name, |book| book.find(first_name, last_name).cloned())?
    }

    pub fn edit_contact(
        &self,
        name: &str,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> DirectoryResult<Contact> {
        let outcome =
            self.with_book_mut(name, |book| book.edit(first_name, last_name, update).cloned())?;
        self.metrics.record(Mutation::Edit, &outcome);
        outcome
    }

    pub fn delete_contact(
        &self,
        name: &str,
        first_name: &str,
        last_name: &str,
    ) -> DirectoryResult<Contact> {
        let outcome = self.with_book_mut(name, |book| book.delete(first_name, last_name))?;
        self.metrics.record(Mutation::Delete, &outcome);
        outcome
    }

    pub fn count_contacts(&self, name: &str) -> DirectoryResult<usize> {
        self.with_book(name, ContactCollection::count)
    }

    /// A snapshot of a book's contacts in stored order.
    pub fn list_contacts(&self, name: &str) -> DirectoryResult<Vec<Contact>> {
        self.with_book(name, ContactCollection::snapshot)
    }

    pub fn filter_contacts(
        &self,
        name: &str,
        field: FilterField,
        value: &str,
    ) -> DirectoryResult<Vec<Contact>> {
        let snapshot = self.list_contacts(name)?;
        Ok(query::filter_by_field(&snapshot, field, value))
    }

    /// A sorted snapshot; the stored order is unchanged.
    pub fn sort_contacts(&self, name: &str, key: SortKey) -> DirectoryResult<Vec<Contact>> {
        let mut snapshot = self.list_contacts(name)?;
        query::sort_slice(&mut snapshot, key);
        Ok(snapshot)
    }

    /// Re-sort a book so the new order persists.
    pub fn sort_book(&self, name: &str, key: SortKey) -> DirectoryResult<()> {
        self.with_book_mut(name, |book| book.sort_in_place(key))
    }

    pub fn count_by_field(
        &self,
        name: &str,
        field: FilterField,
    ) -> DirectoryResult<BTreeMap<String, usize>> {
        let snapshot = self.list_contacts(name)?;
        Ok(query::count_by_field(&snapshot, field))
    }

    /// Contacts matching `field == value` across every book, in book-name order.
    ///
    /// Each book is snapshotted separately; books created or deleted while the
    /// search runs may or may not be included.
    pub fn search_all(&self, field: FilterField, value: &str) -> Vec<BookEntry> {
        let handles: Vec<(String, BookHandle)> = read(&self.books)
            .iter()
            .map(|(name, handle)| (name.clone(), Arc::clone(handle)))
            .collect();

        let mut entries = Vec::new();
        for (book, handle) in handles {
            let snapshot = read(&handle).snapshot();
            entries.extend(
                query::filter_by_field(&snapshot, field, value)
                    .into_iter()
                    .map(|contact| BookEntry {
                        book: book.clone(),
                        contact,
                    }),
            );
        }
        entries
    }

    pub fn metrics(&self) -> &DirectoryMetrics {
        &self.metrics
    }

    /// Run `f` under the book's read lock while the map stays locked shared.
    fn with_book<R>(
        &self,
        name: &str,
        f: impl FnOnce(&ContactCollection) -> R,
    ) -> DirectoryResult<R> {
        let books = read(&self.books);
        let handle = books.get(name).ok_or_else(|| book_not_found(name))?;
        let book = read(handle);
        let result = f(&book);
        Ok(result)
    }

    /// Run `f` under the book's write lock while the map stays locked shared,
    /// so the book cannot be unregistered mid-mutation.
    fn with_book_mut<R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut ContactCollection) -> R,
    ) -> DirectoryResult<R> {
        let books = read(&self.books);
        let handle = books.get(name).ok_or_else(|| book_not_found(name))?;
        let mut book = write(handle);
        let result = f(&mut book);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new(
            first,
            last,
            "123 Main St",
            "Springfield",
            "Illinois",
            "62701",
            "217-555-0100",
            "person@example.com",
        )
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedAddressBookRegistry>();
    }

    #[test]
    fn test_crud_round_trip() {
        let registry = SharedAddressBookRegistry::new();
        registry.create_book("Family").unwrap();
        registry.add_contact("Family", contact("John", "Doe")).unwrap();

        let update = ContactUpdate::new().set(crate::domain::ContactField::Zip, "62702");
        registry.edit_contact("Family", "John", "Doe", &update).unwrap();
        assert_eq!(registry.find_contact("Family", "John", "Doe").unwrap().zip, "62702");

        registry.delete_contact("Family", "John", "Doe").unwrap();
        assert_eq!(registry.count_contacts("Family").unwrap(), 0);
    }

    #[test]
    fn test_unknown_book() {
        let registry = SharedAddressBookRegistry::new();
        assert!(matches!(
            registry.add_contact("Ghost", contact("John", "Doe")),
            Err(DirectoryError::BookNotFound { .. })
        ));
        let update = ContactUpdate::new().set(crate::domain::ContactField::Zip, "62702");
        assert!(matches!(
            registry.edit_contact("Ghost", "John", "Doe", &update),
            Err(DirectoryError::BookNotFound { .. })
        ));
        assert!(matches!(
            registry.delete_contact("Ghost", "John", "Doe"),
            Err(DirectoryError::BookNotFound { .. })
        ));
        assert!(matches!(
            registry.find_contact("Ghost", "John", "Doe"),
            Err(DirectoryError::BookNotFound { .. })
        ));
        assert!(matches!(
            registry.count_contacts("Ghost"),
            Err(DirectoryError::BookNotFound { .. })
        ));
        assert!(!registry.contains_book("Ghost"));
    }

    #[test]
    fn test_delete_book_waits_for_in_flight_mutation() {
        let registry = Arc::new(SharedAddressBookRegistry::new());
        registry.create_book("Family").unwrap();

        let (added_tx, added_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let mutator = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .with_book_mut("Family", |book| {
                        let outcome = book.add(contact("John", "Doe")).is_ok();
                        added_tx.send(()).unwrap();
                        // Keep the book locked until the deleter is waiting.
                        release_rx.recv().unwrap();
                        outcome
                    })
                    .unwrap()
            })
        };
        added_rx.recv().unwrap();

        let deleter = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.delete_book("Family"))
        };
        thread::sleep(Duration::from_millis(50));
        assert!(!deleter.is_finished(), "delete_book must wait for the mutation");

        release_tx.send(()).unwrap();
        assert!(mutator.join().unwrap());

        let removed = deleter.join().unwrap().unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].first_name, "John");
        assert!(!registry.contains_book("Family"));
    }

    #[test]
    fn test_mutation_after_delete_book_is_book_not_found() {
        let registry = SharedAddressBookRegistry::new();
        registry.create_book("Family").unwrap();
        registry.delete_book("Family").unwrap();

        assert!(matches!(
            registry.add_contact("Family", contact("John", "Doe")),
            Err(DirectoryError::BookNotFound { .. })
        ));
        assert_eq!(registry.metrics().contacts_added_total(), 0);
    }

    #[test]
    fn test_concurrent_adds_to_same_book_are_serialized() {
        let registry = Arc::new(SharedAddressBookRegistry::new());
        registry.create_book("Team").unwrap();
        let first_names = ["Alice", "Bruno", "Carla", "Diego", "Elena", "Felix", "Greta", "Hiro"];

        let handles: Vec<_> = first_names
            .iter()
            .map(|first| {
                let registry = Arc::clone(&registry);
                let first = first.to_string();
                thread::spawn(move || {
                    // Every thread races to add the same shared contact plus one of its own.
                    let shared = registry.add_contact("Team", contact("Shared", "Person"));
                    let own = registry.add_contact("Team", contact(&first, "Worker"));
                    (shared.is_ok(), own.is_ok())
                })
            })
            .collect();

        let results: Vec<(bool, bool)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let shared_wins = results.iter().filter(|(shared, _)| *shared).count();
        assert_eq!(shared_wins, 1);
        assert!(results.iter().all(|(_, own)| *own));
        assert_eq!(registry.count_contacts("Team").unwrap(), first_names.len() + 1);
        assert_eq!(registry.metrics().duplicate_rejections_total(), 7);
    }

    #[test]
    fn test_different_books_are_independent() {
        let registry = Arc::new(SharedAddressBookRegistry::new());
        registry.create_book("North").unwrap();
        registry.create_book("South").unwrap();

        let spawn = |book: &'static str, last: &'static str| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for first in ["Anna", "Bert", "Cleo", "Dora"] {
                    registry.add_contact(book, contact(first, last)).unwrap();
                }
            })
        };

        let north = spawn("North", "Norris");
        let south = spawn("South", "Southey");
        north.join().unwrap();
        south.join().unwrap();

        assert_eq!(registry.count_contacts("North").unwrap(), 4);
        assert_eq!(registry.count_contacts("South").unwrap(), 4);
        assert_eq!(registry.search_all(FilterField::City, "Springfield").len(), 8);
    }

    #[test]
    fn test_sort_contacts_leaves_stored_order() {
        let registry = SharedAddressBookRegistry::new();
        registry.create_book("Family").unwrap();
        registry.add_contact("Family", contact("Zoe", "Doe")).unwrap();
        registry.add_contact("Family", contact("Amy", "Doe")).unwrap();

        let sorted = registry.sort_contacts("Family", SortKey::Name).unwrap();
        assert_eq!(sorted[0].first_name, "Amy");
        assert_eq!(registry.list_contacts("Family").unwrap()[0].first_name, "Zoe");

        registry.sort_book("Family", SortKey::Name).unwrap();
        assert_eq!(registry.list_contacts("Family").unwrap()[0].first_name, "Amy");
    }

    #[test]
    fn test_delete_book_returns_contents() {
        let registry = SharedAddressBookRegistry::new();
        registry.create_book("Family").unwrap();
        registry.add_contact("Family", contact("John", "Doe")).unwrap();

        let contents = registry.delete_book("Family").unwrap();
        assert_eq!(contents.len(), 1);
        assert!(registry.book_names().is_empty());
    }
}
