//! Field format rules.
//!
//! Each rule is a pure predicate over one field value. [`validate`] applies
//! them in field order and stops at the first failure.

use crate::domain::{ContactField, Violation};
use crate::models::Contact;
use once_cell::sync::Lazy;
use regex::Regex;

// Character classes are spelled out: `\d` and `\w` would accept non-ASCII digits and letters.
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("Failed to compile name regex"));
// Line breaks, including U+2028 and U+2029, never count toward the minimum.
static FREE_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\x{2028}\x{2029}]{4,}$").expect("Failed to compile free text regex")
});
static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Failed to compile zip regex"));
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("Failed to compile phone regex")
});
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

const NAME_REASON: &str =
    "must start with an uppercase letter followed by at least two more letters";
const FREE_TEXT_REASON: &str = "must be at least 4 characters long";
const ZIP_REASON: &str = "must be exactly 5 or 6 digits";
const PHONE_REASON: &str = "must have the form DDD-DDD-DDDD";
const EMAIL_REASON: &str = "must have the form local@domain.tld";

/// Validate every field of `candidate`.
///
/// # Errors
///
/// Returns the [`Violation`] for the first field, in [`ContactField::ALL`]
/// order, that breaks its rule.
pub fn validate(candidate: &Contact) -> Result<(), Violation> {
    ContactField::ALL
        .iter()
        .try_for_each(|&field| validate_field(field, candidate.field(field)))
}

/// Validate a single field value against its rule.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), Violation> {
    let (valid, reason) = match field {
        ContactField::FirstName | ContactField::LastName => (is_valid_name(value), NAME_REASON),
        ContactField::Address | ContactField::City | ContactField::State => {
            (is_valid_free_text(value), FREE_TEXT_REASON)
        }
        ContactField::Zip => (is_valid_zip(value), ZIP_REASON),
        ContactField::Phone => (is_valid_phone(value), PHONE_REASON),
        ContactField::Email => (is_valid_email(value), EMAIL_REASON),
    };

    if valid {
        Ok(())
    } else {
        Err(Violation::new(field, reason))
    }
}

/// Capitalised, letters only, at least three letters.
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// At least four characters of anything but line breaks.
pub fn is_valid_free_text(value: &str) -> bool {
    FREE_TEXT_REGEX.is_match(value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> Contact {
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

    #[test]
    fn test_valid_contact_passes() {
        assert!(validate(&valid_contact()).is_ok());
    }

    #[test]
    fn test_name_rule() {
        assert!(is_valid_name("Ann"));
        assert!(is_valid_name("McDonald"));
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name("john"));
        assert!(!is_valid_name("Jo3n"));
        assert!(!is_valid_name("Mary-Jane"));
        assert!(!is_valid_name("Émile"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_free_text_rule() {
        assert!(is_valid_free_text("Oslo"));
        assert!(is_valid_free_text("1 A St"));
        assert!(!is_valid_free_text("NY"));
        assert!(!is_valid_free_text("abc"));
        assert!(!is_valid_free_text("ab\ncd"));
        assert!(!is_valid_free_text("ab\rcd"));
        assert!(!is_valid_free_text("ab\r\ncd"));
        assert!(!is_valid_free_text("ab\u{2028}cd"));
        assert!(!is_valid_free_text("ab\u{2029}cd"));
        assert!(is_valid_free_text("Zürich"));
    }

    #[test]
    fn test_zip_rule() {
        assert!(is_valid_zip("10001"));
        assert!(is_valid_zip("400001"));
        assert!(!is_valid_zip("1000"));
        assert!(!is_valid_zip("1000001"));
        assert!(!is_valid_zip("10 001"));
        assert!(!is_valid_zip("١٢٣٤٥"));
    }

    #[test]
    fn test_phone_rule() {
        assert!(is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("1234567890"));
        assert!(!is_valid_phone("(123) 456-7890"));
        assert!(!is_valid_phone("123-456-789"));
        assert!(!is_valid_phone("+1-123-456-7890"));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("a_b%c@mail-host.org"));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_first_failing_field_wins() {
        let mut contact = valid_contact();
        contact.zip = "12".to_string();
        contact.email = "broken".to_string();
        contact.city = "NY".to_string();

        let violation = validate(&contact).unwrap_err();
        assert_eq!(violation.field(), ContactField::City);
        assert_eq!(violation.reason(), FREE_TEXT_REASON);
    }

    #[test]
    fn test_each_field_reported_by_name() {
        let bad_values = [
            (ContactField::FirstName, "jo"),
            (ContactField::LastName, "D"),
            (ContactField::Address, "1 A"),
            (ContactField::City, "LA"),
            (ContactField::State, "NY"),
            (ContactField::Zip, "abcde"),
            (ContactField::Phone, "555-1234"),
            (ContactField::Email, "john@"),
        ];

        for (field, value) in bad_values {
            let contact = crate::models::ContactUpdate::new()
                .set(field, value)
                .merge_into(&valid_contact());
            let violation = validate(&contact).unwrap_err();
            assert_eq!(violation.field(), field, "value {:?}", value);
        }
    }
}
