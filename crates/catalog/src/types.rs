//! Core domain types for the product catalog.
//!
//! This module defines the data structures shared by every other crate:
//! - `Product`, the fixed-shape record decoded from the remote API
//! - `ProductCatalog`, an ordered snapshot of products with an id index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a product within one catalog snapshot
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A catalog item as served by the remote REST endpoint.
///
/// Only the fields the page needs are modelled. Any extra fields in the
/// upstream JSON (`description`, `rating`, ...) are ignored by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Non-negative price, in the shop's currency
    pub price: f64,
    /// Grouping label, repeated across products
    pub category: String,
    /// URI of the product picture
    pub image: String,
}

impl Product {
    /// Convenience constructor, mostly used by tests and fixtures
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}

// =============================================================================
// ProductCatalog
// =============================================================================

/// A validated snapshot of products, in the order the source returned them.
///
/// The order matters: category extraction and the filters are all defined
/// in terms of the original sequence, so products live in a `Vec` and the
/// `HashMap` only maps ids to positions.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    pub(crate) products: Vec<Product>,
    pub(crate) id_index: HashMap<ProductId, usize>,
}

impl ProductCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by ID
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.id_index.get(&id).map(|&pos| &self.products[pos])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consume the catalog and hand the products to the pipeline
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
