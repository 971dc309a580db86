//! Parser for product payloads.
//!
//! The remote API (and the local fixture files) deliver a JSON array of
//! product objects:
//!
//! ```text
//! [{"id": 1, "title": "...", "price": 109.95, "category": "...", "image": "..."}, ...]
//! ```
//!
//! Decoding is strict about the five modelled fields and lenient about
//! everything else: unknown fields are skipped.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decode a JSON array of products from a string
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Ok(products)
}

/// Decode a JSON array of products from raw bytes (e.g. an HTTP body)
pub fn parse_products_slice(bytes: &[u8]) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_slice(bytes)?;
    Ok(products)
}

/// Read and decode a products file
///
/// A missing file is reported as `FileNotFound` with the offending path,
/// every other I/O failure is passed through.
pub fn read_products_file(path: &Path) -> Result<Vec<Product>> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;
    parse_products(&contents)
}
