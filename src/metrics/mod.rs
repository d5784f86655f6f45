//! Basic metrics instrumentation for directory operations.
//!
//! Provides counters for successful mutations and for the rejection kinds
//! callers most often need to monitor.

use crate::error::{DirectoryError, DirectoryResult};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The mutating contact operations that are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Edit,
    Delete,
}

/// Metrics collector for directory activity.
///
/// Cloning is cheap and clones share the same counters.
#[derive(Debug, Clone)]
pub struct DirectoryMetrics {
    /// Contacts successfully added
    contacts_added_total: Arc<AtomicU64>,

    /// Contacts successfully edited
    contacts_edited_total: Arc<AtomicU64>,

    /// Contacts successfully deleted
    contacts_deleted_total: Arc<AtomicU64>,

    /// Adds or edits rejected by a field rule
    validation_failures_total: Arc<AtomicU64>,

    /// Adds or edits rejected as duplicates
    duplicate_rejections_total: Arc<AtomicU64>,

    /// Books created
    books_created_total: Arc<AtomicU64>,

    /// Books deleted
    books_deleted_total: Arc<AtomicU64>,
}

impl Default for DirectoryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_edited_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            duplicate_rejections_total: Arc::new(AtomicU64::new(0)),
            books_created_total: Arc::new(AtomicU64::new(0)),
            books_deleted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record the outcome of a contact mutation.
    pub fn record<T>(&self, mutation: Mutation, outcome: &DirectoryResult<T>) {
        let counter = match (mutation, outcome) {
            (Mutation::Add, Ok(_)) => &self.contacts_added_total,
            (Mutation::Edit, Ok(_)) => &self.contacts_edited_total,
            (Mutation::Delete, Ok(_)) => &self.contacts_deleted_total,
            (_, Err(DirectoryError::Validation(_))) => &self.validation_failures_total,
            (_, Err(DirectoryError::DuplicateContact { .. })) => &self.duplicate_rejections_total,
            (_, Err(_)) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a book creation.
    pub fn record_book_created(&self) {
        self.books_created_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a book deletion.
    pub fn record_book_deleted(&self) {
        self.books_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_edited_total(&self) -> u64 {
        self.contacts_edited_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn duplicate_rejections_total(&self) -> u64 {
        self.duplicate_rejections_total.load(Ordering::Relaxed)
    }

    pub fn books_created_total(&self) -> u64 {
        self.books_created_total.load(Ordering::Relaxed)
    }

    pub fn books_deleted_total(&self) -> u64 {
        self.books_deleted_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.contacts_added_total,
            &self.contacts_edited_total,
            &self.contacts_deleted_total,
            &self.validation_failures_total,
            &self.duplicate_rejections_total,
            &self.books_created_total,
            &self.books_deleted_total,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_added_total: self.contacts_added_total(),
            contacts_edited_total: self.contacts_edited_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
            validation_failures_total: self.validation_failures_total(),
            duplicate_rejections_total: self.duplicate_rejections_total(),
            books_created_total: self.books_created_total(),
            books_deleted_total: self.books_deleted_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub contacts_added_total: u64,
    pub contacts_edited_total: u64,
    pub contacts_deleted_total: u64,
    pub validation_failures_total: u64,
    pub duplicate_rejections_total: u64,
    pub books_created_total: u64,
    pub books_deleted_total: u64,
}
