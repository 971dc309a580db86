//! Filter to keep only products of one category.

use crate::query::CatalogQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;

/// Keep the products whose category equals `category`, in their original
/// order.
///
/// `None` and the empty string both mean "all categories" and return the
/// input unchanged. The comparison is exact and case-sensitive.
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category {
        None | Some("") => products,
        Some(category) => products
            .into_iter()
            .filter(|product| product.category == category)
            .collect(),
    }
}

/// Pipeline stage wrapping [`filter_by_category`], driven by
/// `CatalogQuery::category`.
pub struct CategoryFilter;

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(&self, products: Vec<Product>, query: &CatalogQuery) -> Result<Vec<Product>> {
        Ok(filter_by_category(products, query.category.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Backpack", 109.95, "men's clothing", ""),
            Product::new(2, "Ring", 9.99, "jewelery", ""),
            Product::new(3, "Jacket", 55.99, "men's clothing", ""),
            Product::new(4, "Monitor", 599.0, "electronics", ""),
        ]
    }

    #[test]
    fn test_category_filter() {
        let filtered = CategoryFilter
            .apply(sample(), &CatalogQuery::new().with_category("men's clothing"))
            .unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_no_category_is_identity() {
        assert_eq!(filter_by_category(sample(), None), sample());
        assert_eq!(filter_by_category(sample(), Some("")), sample());
    }

    #[test]
    fn test_unknown_or_differently_cased_category() {
        assert!(filter_by_category(sample(), Some("books")).is_empty());
        assert!(filter_by_category(sample(), Some("Jewelery")).is_empty());
    }
}
