//! # Catalog Orchestrator
//!
//! This module coordinates one page request:
//! 1. Fetch the product snapshot from the configured source
//! 2. Extract the category list from the unfiltered snapshot
//! 3. Run the filter pipeline (category → price range → sort)
//! 4. Hand a `CatalogPage` to the renderer
//!
//! A failed fetch is not an error for the page: it is logged and shown as an
//! empty grid with a notice. The JSON endpoint, which has no place to show a
//! notice, gets the error instead.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use catalog::Product;
use pipeline::{CatalogQuery, FilterPipeline, unique_categories};
use sources::ProductSource;

/// Message shown on the page when the product list could not be loaded
pub const LOAD_FAILED_NOTICE: &str =
    "Impossible de charger les produits pour le moment. Veuillez réessayer plus tard.";

/// Everything the renderer needs for one request
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Products to display, filtered and sorted
    pub products: Vec<Product>,
    /// Distinct categories of the unfiltered snapshot, first-seen order
    pub categories: Vec<String>,
    /// Size of the unfiltered snapshot
    pub total: usize,
    /// The parsed request, echoed back into the form
    pub query: CatalogQuery,
    /// User-facing notice when the fetch failed
    pub error: Option<String>,
}

/// Coordinates the product source and the filter pipeline
#[derive(Clone)]
pub struct CatalogOrchestrator {
    source: ProductSource,
    filter_pipeline: Arc<FilterPipeline>,
}

impl CatalogOrchestrator {
    /// Create an orchestrator using the standard pipeline
    pub fn new(source: ProductSource) -> Self {
        Self::with_pipeline(source, FilterPipeline::standard())
    }

    pub fn with_pipeline(source: ProductSource, pipeline: FilterPipeline) -> Self {
        Self {
            source,
            filter_pipeline: Arc::new(pipeline),
        }
    }

    pub fn source(&self) -> &ProductSource {
        &self.source
    }

    /// Build the page model for a request.
    ///
    /// Never fails: fetch and pipeline errors end up in `CatalogPage::error`.
    pub async fn build_page(&self, query: CatalogQuery) -> CatalogPage {
        let start_time = Instant::now();

        let products = match self.load_products().await {
            Ok(products) => products,
            Err(err) => {
                warn!("Serving empty catalog: {:#}", err);
                return CatalogPage {
                    products: Vec::new(),
                    categories: Vec::new(),
                    total: 0,
                    query,
                    error: Some(LOAD_FAILED_NOTICE.to_string()),
                };
            }
        };

        let total = products.len();
        let categories = unique_categories(&products);

        let (products, error) = match self.apply_filters(products, &query) {
            Ok(products) => (products, None),
            Err(err) => {
                warn!("Filtering failed: {:#}", err);
                (Vec::new(), Some(LOAD_FAILED_NOTICE.to_string()))
            }
        };

        info!(
            "Built catalog page: {} of {} products, {} categories in {:.2?}",
            products.len(),
            total,
            categories.len(),
            start_time.elapsed()
        );

        CatalogPage {
            products,
            categories,
            total,
            query,
            error,
        }
    }

    /// Fetch and filter, propagating failures (JSON endpoint, CLI)
    pub async fn filtered_products(&self, query: &CatalogQuery) -> Result<Vec<Product>> {
        let products = self.load_products().await?;
        self.apply_filters(products, query)
    }

    /// Fetch the unfiltered snapshot
    pub async fn load_products(&self) -> Result<Vec<Product>> {
        let catalog = self
            .source
            .fetch()
            .await
            .with_context(|| format!("Failed to load products from {}", self.source.describe()))?;
        Ok(catalog.into_products())
    }

    /// Apply the filter pipeline to products
    fn apply_filters(&self, products: Vec<Product>, query: &CatalogQuery) -> Result<Vec<Product>> {
        self.filter_pipeline
            .apply(products, query)
            .context("Failed to apply filters")
    }
}
