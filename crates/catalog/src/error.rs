//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Struct-like variants that carry context about the bad value
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors raised while building or ranking movie records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// None of the movies handed to a genre-based computation had any genre tags
    #[error("No genres available for processing.")]
    NoGenres,

    /// A field coming from the provider had a value we could not interpret
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
