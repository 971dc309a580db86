//! Property tests for the four list transformations.

use catalog::Product;
use pipeline::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_products() -> impl Strategy<Value = Vec<Product>> {
    // Few categories and coarse prices so that ties and repeats are common
    prop::collection::vec((prop::sample::select(vec!["a", "b", "c", "D"]), 0u32..50), 0..40)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, cents))| {
                    Product::new(i as u64, format!("p{i}"), cents as f64 / 2.0, category, "")
                })
                .collect()
        })
}

/// True when `sub` can be obtained from `full` by deleting elements
fn is_subsequence(sub: &[Product], full: &[Product]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f.id == s.id))
}

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn empty_category_is_identity(products in arb_products()) {
        prop_assert_eq!(filter_by_category(products.clone(), Some("")), products.clone());
        prop_assert_eq!(filter_by_category(products.clone(), None), products);
    }

    #[test]
    fn category_filter_selects_matching_subsequence(
        products in arb_products(),
        category in prop::sample::select(vec!["a", "b", "c", "D", "d"]),
    ) {
        let filtered = filter_by_category(products.clone(), Some(category));

        prop_assert!(filtered.iter().all(|p| p.category == category));
        prop_assert!(is_subsequence(&filtered, &products));
        prop_assert_eq!(
            filtered.len(),
            products.iter().filter(|p| p.category == category).count()
        );
    }

    #[test]
    fn price_filter_respects_bounds(
        products in arb_products(),
        min in prop::option::of(0u32..30),
        max in prop::option::of(0u32..30),
    ) {
        let min = min.map(f64::from);
        let max = max.map(f64::from);
        let filtered = filter_by_price_range(products.clone(), min, max);

        for p in &filtered {
            prop_assert!(min.is_none_or(|m| p.price >= m));
            prop_assert!(max.is_none_or(|m| p.price <= m));
        }
        prop_assert!(is_subsequence(&filtered, &products));
        if min.is_none() && max.is_none() {
            prop_assert_eq!(filtered, products);
        }
    }

    #[test]
    fn ascending_sort_is_ordered_stable_permutation(products in arb_products()) {
        let sorted = sort_by_price(products.clone(), Some(SortOrder::Ascending));

        prop_assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
        // Ids are assigned in source order, so stability means ids increase
        // inside every run of equal prices
        prop_assert!(sorted.windows(2).all(|w| w[0].price != w[1].price || w[0].id < w[1].id));

        let mut sorted_ids = ids(&sorted);
        sorted_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, ids(&products));
    }

    #[test]
    fn descending_sort_is_ordered_stable_permutation(products in arb_products()) {
        let sorted = sort_by_price(products.clone(), Some(SortOrder::Descending));

        prop_assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
        prop_assert!(sorted.windows(2).all(|w| w[0].price != w[1].price || w[0].id < w[1].id));

        let mut sorted_ids = ids(&sorted);
        sorted_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, ids(&products));
    }

    #[test]
    fn unique_categories_matches_distinct_set(products in arb_products()) {
        let categories = unique_categories(&products);

        let distinct: HashSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
        let returned: HashSet<&str> = categories.iter().map(String::as_str).collect();
        prop_assert_eq!(returned.len(), categories.len());
        prop_assert_eq!(returned, distinct);

        // First-seen order: each category's first occurrence index increases
        let first_seen: Vec<usize> = categories
            .iter()
            .map(|c| products.iter().position(|p| &p.category == c).unwrap())
            .collect();
        prop_assert!(first_seen.windows(2).all(|w| w[0] < w[1]));
    }
}
