//! Derived values over a product collection.
//!
//! The category dropdown on the page is built from the unfiltered
//! collection, so these helpers run before any filter.

use catalog::Product;
use std::collections::HashMap;
use std::collections::HashSet;

/// Distinct categories in order of first occurrence.
///
/// ## Algorithm
/// Walk the products once, remembering which labels were already emitted
/// in a HashSet so each label is pushed exactly once.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = Vec::new();

    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }

    categories
}

/// Distinct categories with the number of products in each,
/// in order of first occurrence
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for product in products {
        match positions.get(product.category.as_str()) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(product.category.as_str(), counts.len());
                counts.push((product.category.clone(), 1));
            }
        }
    }

    counts
}
