//! IdentityKey value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(first_name, last_name)` pair that identifies a contact within one
/// address book.
///
/// Comparison is exact and case-sensitive: `"John Doe"` and `"john Doe"` are
/// different identities.
///
/// # Example
///
/// ```
/// use address_book::domain::IdentityKey;
///
/// let key = IdentityKey::new("John", "Doe");
/// assert_eq!(key.first_name(), "John");
/// assert_eq!(key.to_string(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityKey {
    first_name: String,
    last_name: String,
}

impl IdentityKey {
    /// Create a new identity key.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Get the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether this key identifies the given name pair.
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
