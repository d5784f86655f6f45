//! Shared test utilities for integration tests.
//!
//! This module provides registry setup helpers and assertions used across
//! the address book integration tests.

use address_book::{AddressBookRegistry, Contact, DirectoryError};

pub mod fixtures;

/// Create a registry with the given books already registered.
#[allow(dead_code)]
pub fn registry_with_books(names: &[&str]) -> AddressBookRegistry {
    let mut registry = AddressBookRegistry::new();
    for name in names {
        registry
            .create_book(name)
            .expect("fresh registry should accept every book name");
    }
    registry
}

/// Assert that two contacts agree on every field.
#[allow(dead_code)]
pub fn assert_same_fields(actual: &Contact, expected: &Contact) {
    assert_eq!(actual.first_name, expected.first_name, "firstName differs");
    assert_eq!(actual.last_name, expected.last_name, "lastName differs");
    assert_eq!(actual.address, expected.address, "address differs");
    assert_eq!(actual.city, expected.city, "city differs");
    assert_eq!(actual.state, expected.state, "state differs");
    assert_eq!(actual.zip, expected.zip, "zip differs");
    assert_eq!(actual.phone, expected.phone, "phone differs");
    assert_eq!(actual.email, expected.email, "email differs");
}

/// Assert that an outcome is a duplicate-contact rejection.
#[allow(dead_code)]
pub fn assert_duplicate<T: std::fmt::Debug>(outcome: Result<T, DirectoryError>) {
    match outcome {
        Err(DirectoryError::DuplicateContact { .. }) => {}
        other => panic!("Expected DuplicateContact, got: {:?}", other),
    }
}
