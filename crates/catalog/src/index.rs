//! ProductCatalog building and validation.
//!
//! Decoded products are checked before anything downstream sees them:
//! - prices must be finite and non-negative
//! - ids must be unique within the snapshot
//!
//! The filters and the sorter rely on these preconditions instead of
//! re-checking them on every request.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::debug;

impl ProductCatalog {
    /// Build a validated catalog from decoded products, keeping their order
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        validate_prices(&products)?;

        let mut id_index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            match id_index.entry(product.id) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateId(product.id)),
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
            }
        }

        debug!("Built product catalog with {} products", products.len());
        Ok(Self { products, id_index })
    }

    /// Decode and validate a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_products(parser::parse_products(json)?)
    }

    /// Decode and validate a catalog from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_products(parser::parse_products_slice(bytes)?)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::from_products(parser::read_products_file(path)?)
    }
}

/// Reject the first product (in source order) whose price is negative or
/// not a finite number
///
/// `find_first` keeps the reported product deterministic even though the
/// scan runs in parallel.
fn validate_prices(products: &[Product]) -> Result<()> {
    let invalid = products
        .par_iter()
        .find_first(|p| !p.price.is_finite() || p.price < 0.0);

    match invalid {
        Some(product) => Err(CatalogError::InvalidValue {
            id: product.id,
            field: "price".to_string(),
            value: product.price.to_string(),
        }),
        None => Ok(()),
    }
}
