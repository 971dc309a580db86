//! Error types for product sources.

use catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading a product snapshot
#[derive(Error, Debug)]
pub enum SourceError {
    /// The HTTP request could not be sent or the body could not be read
    /// (connection refused, DNS failure, timeout, ...)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote API answered with a non-success status
    #[error("Remote API at {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The payload was fetched but is not a valid product catalog
    #[error("Invalid product payload: {0}")]
    Catalog(#[from] CatalogError),
}

impl SourceError {
    /// True when the failure happened before a response was received
    pub fn is_timeout(&self) -> bool {
        matches!(self, SourceError::Request { source, .. } if source.is_timeout())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SourceError>;
