//! Contact collections.
//!
//! A collection is the storage behind one named address book. It owns
//! de-duplication and calls the validation rules before every mutation.

mod contact_collection;

pub use contact_collection::ContactCollection;
