//! Error types for the catalog crate.
//!
//! - thiserror for defining custom error types
//! - One variant per way a product snapshot can be rejected
//! - Automatic `Display` and `Error` trait implementations

use crate::types::ProductId;
use thiserror::Error;

/// Errors that can occur while decoding or validating a product catalog
///
/// Rust concept: the `#[from]` attribute generates a `From` impl, so the
/// `?` operator converts I/O and JSON errors into this type automatically.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The payload was not a JSON array of product objects
    #[error("JSON decode error at line {line}, column {column}: {reason}")]
    DecodeError {
        line: usize,
        column: usize,
        reason: String,
    },

    /// A product field had a value outside its domain (e.g. a negative price)
    #[error("Invalid value for {field} of product {id}: {value}")]
    InvalidValue {
        id: ProductId,
        field: String,
        value: String,
    },

    /// Two products in the same snapshot share an id
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DecodeError {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
