//! Address book registries.
//!
//! A registry maps book names to [`ContactCollection`](crate::collection::ContactCollection)s
//! and routes per-book operations. [`AddressBookRegistry`] is the plain owned form;
//! [`SharedAddressBookRegistry`] locks each book separately for use across threads.

mod address_book_registry;
mod shared;

pub use address_book_registry::{AddressBookRegistry, BookEntry};
pub use shared::SharedAddressBookRegistry;
