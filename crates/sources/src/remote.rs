//! Remote Source - the product REST endpoint
//!
//! Performs one `GET` per call and decodes the JSON array body into a
//! validated `ProductCatalog`.
//!
//! ## Failure modes
//! - connection or timeout errors → `SourceError::Request`
//! - non-2xx status → `SourceError::Status`
//! - body that is not a product array → `SourceError::Catalog`
//!
//! Callers decide how to present a failure; the catalog page shows an empty
//! grid.

use crate::error::{Result, SourceError};
use catalog::ProductCatalog;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Default upper bound for one fetch, connect time included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches products from a REST endpoint returning a JSON array
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl RemoteSource {
    /// Create a new remote source
    ///
    /// ## Parameters
    /// - `url`: full URL of the products endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configure the request timeout (default: 10s)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current product list
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<ProductCatalog> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.request_error(source))?;
        debug!("Received {} bytes with status {}", body.len(), status);

        let catalog = ProductCatalog::from_slice(&body)?;
        info!(
            "Fetched {} products in {:.2?}",
            catalog.len(),
            start.elapsed()
        );
        Ok(catalog)
    }

    fn request_error(&self, source: reqwest::Error) -> SourceError {
        SourceError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let source = RemoteSource::new("http://localhost:1/products");
        assert_eq!(source.url(), "http://localhost:1/products");
        assert_eq!(source.timeout, DEFAULT_TIMEOUT);

        let source = source.with_timeout(Duration::from_millis(250));
        assert_eq!(source.timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        // Port 1 is reserved and nothing listens on it in test environments
        let source = RemoteSource::new("http://127.0.0.1:1/products")
            .with_timeout(Duration::from_secs(2));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Request { .. }));
    }
}
