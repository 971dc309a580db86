//! # Catalog Crate
//!
//! This crate holds the product data model shared by the whole workspace.
//!
//! ## Main Components
//!
//! - **types**: `Product` and the `ProductCatalog` snapshot
//! - **parser**: decode JSON product arrays from strings, bytes or files
//! - **index**: build and validate a `ProductCatalog`
//! - **error**: error types for decoding and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::ProductCatalog;
//! use std::path::Path;
//!
//! let catalog = ProductCatalog::load_from_file(Path::new("data/products.json"))?;
//! let backpack = catalog.get_product(1).unwrap();
//!
//! println!("{} costs {}", backpack.title, backpack.price);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Product, ProductCatalog, ProductId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = ProductCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_from_json_round_trip_fields() {
        let catalog = ProductCatalog::from_json(
            r#"[{"id": 4, "title": "Mens Casual Slim Fit", "price": 15.99,
                 "category": "men's clothing", "image": "https://example.test/4.jpg"}]"#,
        )
        .unwrap();

        let product = catalog.get_product(4).unwrap();
        assert_eq!(product.title, "Mens Casual Slim Fit");
        assert_eq!(product.image, "https://example.test/4.jpg");
    }

    #[test]
    fn test_empty_queries() {
        let catalog = ProductCatalog::from_products(Vec::new()).unwrap();
        assert!(catalog.get_product(1).is_none());
        assert!(catalog.into_products().is_empty());
    }
}
