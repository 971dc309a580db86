//! Filter to keep only products inside an inclusive price range.

use crate::query::CatalogQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;

/// Keep the products with `min_price <= price <= max_price`.
///
/// Each bound is optional and an absent bound does not constrain. With both
/// bounds absent the input is returned unchanged. A range with
/// `min_price > max_price` is empty.
pub fn filter_by_price_range(
    products: Vec<Product>,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Vec<Product> {
    if min_price.is_none() && max_price.is_none() {
        return products;
    }

    products
        .into_iter()
        .filter(|product| {
            min_price.is_none_or(|min| product.price >= min)
                && max_price.is_none_or(|max| product.price <= max)
        })
        .collect()
}

/// Pipeline stage wrapping [`filter_by_price_range`], driven by
/// `CatalogQuery::min_price` and `CatalogQuery::max_price`.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, products: Vec<Product>, query: &CatalogQuery) -> Result<Vec<Product>> {
        Ok(filter_by_price_range(products, query.min_price, query.max_price))
    }
}
