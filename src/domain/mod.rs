//! Domain value objects and types.
//!
//! This module contains the small typed vocabulary shared by every layer:
//! field names, the identity key used for de-duplication, and the structured
//! validation failure.

pub mod errors;
pub mod field;
pub mod identity;

pub use errors::Violation;
pub use field::ContactField;
pub use identity::IdentityKey;
