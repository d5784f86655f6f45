//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for an address book registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Books created when a registry is built from this config (default: none)
    pub default_books: Vec<String>,

    /// Maximum number of contacts per book (default: unlimited)
    pub max_contacts_per_book: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_DEFAULT_BOOKS`: Comma-separated book names to pre-create
    /// - `ADDRESS_BOOK_MAX_CONTACTS`: Positive per-book contact limit
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let log_level = env::var("ADDRESS_BOOK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let default_books = env::var("ADDRESS_BOOK_DEFAULT_BOOKS")
            .map(|raw| Self::parse_book_list(&raw))
            .unwrap_or_default();

        let max_contacts_per_book = Self::parse_env_limit("ADDRESS_BOOK_MAX_CONTACTS")?;

        Ok(Config {
            log_level,
            default_books,
            max_contacts_per_book,
        })
    }

    /// Split a comma-separated list, dropping blanks and repeated names.
    fn parse_book_list(raw: &str) -> Vec<String> {
        let mut books: Vec<String> = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            if !books.iter().any(|existing| existing == name) {
                books.push(name.to_string());
            }
        }
        books
    }

    /// Parse an optional positive limit.
    fn parse_env_limit(var_name: &str) -> ConfigResult<Option<usize>> {
        let Ok(val) = env::var(var_name) else {
            return Ok(None);
        };

        match val.trim().parse::<usize>() {
            Ok(0) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than zero".to_string(),
            }),
            Ok(limit) => Ok(Some(limit)),
            Err(_) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            default_books: Vec::new(),
            max_contacts_per_book: None,
        }
    }
}
