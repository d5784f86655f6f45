//! Contact field validation.
//!
//! Stateless format checks applied before any record enters or changes
//! within a collection.

pub mod rules;

pub use rules::{validate, validate_field};
