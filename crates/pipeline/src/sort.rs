//! Price ordering, the terminal stage of the pipeline.

use crate::query::{CatalogQuery, SortOrder};
use catalog::Product;
use std::cmp::Ordering;

/// Sort products by price.
///
/// `Vec::sort_by` is stable, so products with equal prices keep their
/// relative order in both directions. `None` returns the input unchanged.
pub fn sort_by_price(mut products: Vec<Product>, order: Option<SortOrder>) -> Vec<Product> {
    match order {
        None => {}
        Some(SortOrder::Ascending) => products.sort_by(|a, b| compare_price(a, b)),
        Some(SortOrder::Descending) => products.sort_by(|a, b| compare_price(b, a)),
    }
    products
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

/// Pipeline stage wrapping [`sort_by_price`], driven by `CatalogQuery::sort`.
///
/// Deliberately not a `Filter`: a `FilterPipeline` holds at most one sorter
/// and always runs it after every filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceSorter;

impl PriceSorter {
    pub fn name(&self) -> &str {
        "PriceSorter"
    }

    pub fn apply(&self, products: Vec<Product>, query: &CatalogQuery) -> Vec<Product> {
        sort_by_price(products, query.sort)
    }
}
