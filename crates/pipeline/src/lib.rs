//! Pipeline for filtering and sorting catalog products.
//!
//! This crate provides:
//! - The four pure list transformations the page is built on:
//!   `unique_categories`, `filter_by_category`, `filter_by_price_range`
//!   and `sort_by_price`
//! - Filter trait and implementations wrapping them
//! - FilterPipeline for composing filters with a terminal sort
//! - CatalogQuery / FilterForm for turning submitted form fields into
//!   typed filters
//!
//! ## Architecture
//! The pipeline processes a product list in a fixed order:
//! 1. Category filter
//! 2. Price range filter
//! 3. Price sort
//!
//! Categories for the dropdown are extracted from the unfiltered list.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterForm, FilterPipeline, unique_categories};
//!
//! let categories = unique_categories(&products);
//! let query = form.into_query();
//! let visible = FilterPipeline::standard().apply(products, &query)?;
//! ```

pub mod traits;
pub mod query;
pub mod categories;
pub mod filters;
pub mod sort;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use query::{CatalogQuery, FilterForm, SortOrder};
pub use categories::{category_counts, unique_categories};
pub use filters::{CategoryFilter, PriceRangeFilter, filter_by_category, filter_by_price_range};
pub use sort::{PriceSorter, sort_by_price};
pub use filter_pipeline::FilterPipeline;
