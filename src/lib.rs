//! Address Book - an in-memory contact directory with multiple named books.
//!
//! Each book holds validated contact records, unique by first and last name,
//! with create, read, update, delete, filter, and sort operations. Every
//! operation returns a structured outcome; nothing is printed or formatted.
//!
//! # Architecture
//!
//! - **domain**: Field names, identity keys, and validation violations
//! - **models**: The contact record and partial updates
//! - **validation**: Per-field format rules
//! - **collection**: A single de-duplicated address book
//! - **query**: Filtering, grouping, and stable sorting over snapshots
//! - **registry**: Named books, single-owner and thread-safe
//! - **error**: Error taxonomy
//! - **config**: Configuration from environment variables
//! - **metrics**: Outcome counters
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBookRegistry, Contact, ContactField, ContactUpdate};
//!
//! let mut registry = AddressBookRegistry::new();
//! registry.create_book("Family").unwrap();
//! registry
//!     .add_contact(
//!         "Family",
//!         Contact::new(
//!             "John",
//!             "Doe",
//!             "123 Main St",
//!             "New York",
//!             "New York",
//!             "10001",
//!             "123-456-7890",
//!             "john.doe@example.com",
//!         ),
//!     )
//!     .unwrap();
//!
//! let update = ContactUpdate::new().set(ContactField::Phone, "999-888-7777");
//! registry.edit_contact("Family", "John", "Doe", &update).unwrap();
//! assert_eq!(
//!     registry.find_contact("Family", "John", "Doe").unwrap().phone,
//!     "999-888-7777"
//! );
//! ```

pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod query;
pub mod registry;
pub mod validation;

pub use collection::ContactCollection;
pub use config::Config;
pub use domain::{ContactField, IdentityKey, Violation};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use metrics::{DirectoryMetrics, MetricsSummary};
pub use models::{Contact, ContactUpdate};
pub use query::{FilterField, SortKey};
pub use registry::{AddressBookRegistry, BookEntry, SharedAddressBookRegistry};
