//! The FilterPipeline orchestrates the filters and the final sort.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern and finishes with an
//! optional price sort.

use crate::filters::{CategoryFilter, PriceRangeFilter};
use crate::query::CatalogQuery;
use crate::sort::PriceSorter;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;
use tracing;

/// Chains filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter)
///     .add_filter(PriceRangeFilter)
///     .with_sorter(PriceSorter);
///
/// let products = pipeline.apply(products, &query)?;
/// ```
///
/// Filters run in insertion order. The sorter, if any, always runs last so
/// no filter can disturb the price order.
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    sorter: Option<PriceSorter>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sorter: None,
        }
    }

    /// The catalog page pipeline: category → price range → price sort.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(CategoryFilter)
            .add_filter(PriceRangeFilter)
            .with_sorter(PriceSorter)
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Set the terminal sort stage.
    pub fn with_sorter(mut self, sorter: PriceSorter) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Names of the stages in the order they run
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters
            .iter()
            .map(|f| f.name())
            .chain(self.sorter.as_ref().map(|s| s.name()))
            .collect()
    }

    /// Apply all filters in sequence, then the sorter.
    ///
    /// ## Algorithm
    /// 1. Start with the input products
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Sort the survivors by price if a sorter is set
    /// 4. Return the final list
    ///
    /// # Arguments
    /// * `products` - The products to process
    /// * `query` - The parsed request filters and sort order
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - The products to display
    /// * `Err` - If any filter fails
    pub fn apply(&self, products: Vec<Product>, query: &CatalogQuery) -> Result<Vec<Product>> {
        let mut current = products;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        if let Some(sorter) = &self.sorter {
            tracing::debug!("Applying {} (order: {:?})", sorter.name(), query.sort);
            current = sorter.apply(current, query);
        }

        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
