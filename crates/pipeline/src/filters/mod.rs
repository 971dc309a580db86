//! Filter implementations for the product pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline, plus the plain functions they wrap.

pub mod category;
pub mod price_range;

// Re-export for convenience
pub use category::{CategoryFilter, filter_by_category};
pub use price_range::{PriceRangeFilter, filter_by_price_range};
