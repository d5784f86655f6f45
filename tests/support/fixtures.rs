//! Test fixtures and sample data.
//!
//! Every fixture here passes validation unless its name says otherwise.

use address_book::Contact;

/// The contact used throughout the documented scenario.
pub fn john_doe() -> Contact {
    Contact::new(
        "John",
        "Doe",
        "123 Main St",
        "New York",
        "New York",
        "10001",
        "123-456-7890",
        "john.doe@example.com",
    )
}

/// A valid contact with the given name and location.
#[allow(dead_code)]
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "42 Harbor Road",
        city,
        state,
        "560001",
        "555-010-2030",
        format!(
            "{}.{}@example.org",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
    )
}

/// A mixed set of valid contacts spread over a few cities and states.
#[allow(dead_code)]
pub fn sample_directory() -> Vec<Contact> {
    vec![
        sample_contact("Zara", "Khan", "Seattle", "Washington"),
        sample_contact("Adam", "Smith", "Portland", "Oregon"),
        sample_contact("Mia", "Lopez", "Seattle", "Washington"),
        sample_contact("Adam", "Brown", "Spokane", "Washington"),
        sample_contact("Leo", "Chen", "Portland", "Oregon"),
    ]
}
