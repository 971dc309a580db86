//! File Source - a JSON snapshot on local disk
//!
//! Same payload format as the remote API. Handy for offline development,
//! demos and the CLI's `--file` flag.

use crate::error::Result;
use catalog::{CatalogError, ProductCatalog};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads products from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file
    pub async fn fetch(&self) -> Result<ProductCatalog> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => CatalogError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => CatalogError::IoError(err),
        })?;

        let catalog = ProductCatalog::from_slice(&bytes)?;
        info!(
            "Loaded {} products from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}
