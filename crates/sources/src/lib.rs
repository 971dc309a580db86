//! # Sources Crate
//!
//! This crate implements the places a product snapshot can come from.
//!
//! ## Components
//!
//! ### Remote Source
//! The production path: one HTTP `GET` against the product REST endpoint
//! (`https://fakestoreapi.com/products` by default), decoded with
//! `catalog::ProductCatalog::from_slice`.
//!
//! ### File Source
//! The same JSON payload read from local disk.
//!
//! ### Static Source
//! A catalog held in memory, used by tests and benchmarks.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{ProductSource, RemoteSource};
//!
//! let source = ProductSource::Remote(RemoteSource::new(sources::DEFAULT_API_URL));
//! let catalog = source.fetch().await?;
//! println!("{} products from {}", catalog.len(), source.describe());
//! ```

// Public modules
pub mod error;
pub mod remote;
pub mod file;

// Re-export commonly used types
pub use error::{Result, SourceError};
pub use file::FileSource;
pub use remote::{DEFAULT_TIMEOUT, RemoteSource};

use catalog::ProductCatalog;

/// Product endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";

/// Where the page loads its products from
#[derive(Debug, Clone)]
pub enum ProductSource {
    Remote(RemoteSource),
    File(FileSource),
    Static(ProductCatalog),
}

impl ProductSource {
    /// Load a fresh snapshot
    pub async fn fetch(&self) -> Result<ProductCatalog> {
        match self {
            ProductSource::Remote(remote) => remote.fetch().await,
            ProductSource::File(file) => file.fetch().await,
            ProductSource::Static(catalog) => Ok(catalog.clone()),
        }
    }

    /// Human-readable origin, for logs and CLI output
    pub fn describe(&self) -> String {
        match self {
            ProductSource::Remote(remote) => remote.url().to_string(),
            ProductSource::File(file) => file.path().display().to_string(),
            ProductSource::Static(catalog) => format!("in-memory ({} products)", catalog.len()),
        }
    }
}

impl From<ProductCatalog> for ProductSource {
    fn from(catalog: ProductCatalog) -> Self {
        ProductSource::Static(catalog)
    }
}
