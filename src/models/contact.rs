//! Contact model representing one entry in an address book.

use crate::domain::{ContactField, IdentityKey};
use serde::{Deserialize, Serialize};

/// A contact record.
///
/// All fields are plain text. A `Contact` is only a *candidate* until it has
/// passed [`validate`](crate::validation::validate); collections never store an
/// unvalidated record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Create a contact from its eight fields, in declaration order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// The identity key used for de-duplication and lookup.
    pub fn identity(&self) -> IdentityKey {
        IdentityKey::new(self.first_name.as_str(), self.last_name.as_str())
    }

    /// Whether this contact has the given first and last name.
    pub fn has_identity(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Read a field by name.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }
}

/// A partial update for [`Contact`].
///
/// `None` fields keep the stored value; `Some` fields overwrite it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field, returning the update for chaining.
    pub fn set(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Address => self.address = value,
            ContactField::City => self.city = value,
            ContactField::State => self.state = value,
            ContactField::Zip => self.zip = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
        }
        self
    }

    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the merged candidate: each field from the update if present,
    /// otherwise from `existing`.
    pub fn merge_into(&self, existing: &Contact) -> Contact {
        fn pick(update: &Option<String>, current: &str) -> String {
            update.clone().unwrap_or_else(|| current.to_string())
        }

        Contact {
            first_name: pick(&self.first_name, &existing.first_name),
            last_name: pick(&self.last_name, &existing.last_name),
            address: pick(&self.address, &existing.address),
            city: pick(&self.city, &existing.city),
            state: pick(&self.state, &existing.state),
            zip: pick(&self.zip, &existing.zip),
            phone: pick(&self.phone, &existing.phone),
            email: pick(&self.email, &existing.email),
        }
    }
}
