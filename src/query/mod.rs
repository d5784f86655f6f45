//! Query utilities for contact lists.
//!
//! This module provides exact-match filtering, grouping counts, and stable
//! sorting over snapshots of an address book.

pub mod engine;

pub use engine::{count_by_field, filter_by_field, sort_by, sort_slice, FilterField, SortKey};
