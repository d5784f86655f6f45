//! Data models for address book entries.
//!
//! This module contains the contact record and the partial update applied by
//! the edit operation.

pub mod contact;

pub use contact::{Contact, ContactUpdate};
