//! Server crate for the product catalog page.
//!
//! This crate wires the product source and the filter pipeline into an
//! axum application that renders the catalog as HTML.

pub mod config;
pub mod orchestrator;
pub mod render;
pub mod routes;

pub use crate::config::{ConfigError, ServerConfig};
pub use orchestrator::{CatalogOrchestrator, CatalogPage};
pub use render::{RenderSettings, render_page};
pub use routes::build_app;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn run(config: ServerConfig) -> Result<()> {
    let orchestrator = CatalogOrchestrator::new(config.product_source());
    info!("Products will be loaded from {}", orchestrator.source().describe());

    let app = build_app(orchestrator, config.render_settings());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Catalog server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Catalog server stopped");
    Ok(())
}

/// Resolves on the first Ctrl-C or (on Unix) SIGTERM.
///
/// If a handler cannot be installed that arm never resolves, so the other
/// signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {}
            Err(err) => {
                error!("Failed to install Ctrl-C handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    info!("Shutdown signal received, draining connections");
}
