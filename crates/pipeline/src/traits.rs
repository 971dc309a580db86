//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a product collection.

use crate::query::CatalogQuery;
use anyhow::Result;
use catalog::Product;

/// Core trait for narrowing a product collection.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline be shared by every request handler
/// - Filters take ownership of the Vec<Product> and return a filtered Vec
/// - A filter only ever selects a subsequence: it never reorders, duplicates
///   or invents products. Reordering is the sorter's job.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of products.
    ///
    /// # Arguments
    /// * `products` - The products to filter (takes ownership)
    /// * `query` - The parsed request filters
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - The retained products, in their original order
    /// * `Err` - If filtering fails
    fn apply(&self, products: Vec<Product>, query: &CatalogQuery) -> Result<Vec<Product>>;
}
