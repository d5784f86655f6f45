//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every directory failure is recoverable and returned to the caller.

use crate::domain::{IdentityKey, Violation};
use thiserror::Error;

/// Errors returned by address book and registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field failed its format rule
    #[error("Validation failed: {0}")]
    Validation(#[from] Violation),

    /// Another contact in the same book already has this identity
    #[error("Duplicate contact: {identity}")]
    DuplicateContact { identity: IdentityKey },

    /// No contact with this identity exists in the book
    #[error("Contact not found: {identity}")]
    NotFound { identity: IdentityKey },

    /// No book is registered under this name
    #[error("Address book not found: {name}")]
    BookNotFound { name: String },

    /// A book is already registered under this name
    #[error("Address book already exists: {name}")]
    AlreadyExists { name: String },

    /// Book names must contain at least one non-whitespace character
    #[error("Invalid address book name: {name:?}")]
    InvalidBookName { name: String },

    /// The book has reached its configured contact limit
    #[error("Address book {name} is full (limit {limit})")]
    CapacityExceeded { name: String, limit: usize },
}

impl DirectoryError {
    /// The violation carried by a validation failure, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Validation(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
