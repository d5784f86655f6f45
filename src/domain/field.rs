//! Contact field names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight fields of a [`Contact`](crate::models::Contact).
///
/// Variants are declared in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// All fields, in validation order.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// The field name as it appears in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
