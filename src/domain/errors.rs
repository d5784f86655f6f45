//! Domain validation errors.

use super::field::ContactField;
use serde::Serialize;
use std::fmt;

/// A single failed field rule.
///
/// Validation stops at the first failing field, so a `Violation` always names
/// exactly one field together with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    field: ContactField,
    reason: String,
}

impl Violation {
    /// Create a violation for `field`.
    pub fn new(field: ContactField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// The field whose rule failed.
    pub fn field(&self) -> ContactField {
        self.field
    }

    /// Why the field was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for Violation {}
