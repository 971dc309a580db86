//! Example: Fetch the live catalog and summarize it
//!
//! Run with: cargo run --package sources --example fetch_products [URL]
//!
//! This example shows how to:
//! 1. Build a remote source
//! 2. Fetch and validate the product list
//! 3. Group products by category

use pipeline::category_counts;
use sources::{DEFAULT_API_URL, ProductSource, RemoteSource};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,sources=debug")
        .init();

    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let source = ProductSource::Remote(RemoteSource::new(url));

    println!("Fetching products from {}...", source.describe());
    let start = Instant::now();
    let catalog = source.fetch().await?;
    println!("Fetched {} products in {:?}\n", catalog.len(), start.elapsed());

    for (category, count) in category_counts(catalog.products()) {
        println!("  {:<20} {:>3} products", category, count);
    }

    Ok(())
}
