//! HTTP routes for the catalog page.
//!
//! - `GET /`             page, filters taken from the query string
//! - `POST /`            page, filters taken from the submitted form
//! - `GET /api/products` filtered products as JSON
//! - `GET /health`       liveness probe

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::{debug, warn};

use pipeline::{CatalogQuery, FilterForm};

use crate::orchestrator::CatalogOrchestrator;
use crate::render::{RenderSettings, render_page};

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub orchestrator: CatalogOrchestrator,
    pub render: RenderSettings,
}

/// Build the router with all catalog routes
pub fn build_app(orchestrator: CatalogOrchestrator, render: RenderSettings) -> Router {
    let state = Arc::new(AppState {
        orchestrator,
        render,
    });

    Router::new()
        .route("/", get(show_catalog).post(filter_catalog))
        .route("/api/products", get(list_products))
        .route("/health", get(health))
        .with_state(state)
}

/// GET / - Render the page
async fn show_catalog(
    State(state): State<Arc<AppState>>,
    Query(form): Query<FilterForm>,
) -> Html<String> {
    render_catalog(&state, form.into_query()).await
}

/// POST / - Render the page for the submitted filter form
async fn filter_catalog(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FilterForm>,
) -> Html<String> {
    render_catalog(&state, form.into_query()).await
}

async fn render_catalog(state: &AppState, query: CatalogQuery) -> Html<String> {
    debug!("Rendering catalog for {:?}", query);
    let page = state.orchestrator.build_page(query).await;
    Html(render_page(&page, &state.render))
}

/// GET /api/products - Filtered products as a JSON array
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(form): Query<FilterForm>,
) -> Response {
    match state.orchestrator.filtered_products(&form.into_query()).await {
        Ok(products) => Json(products).into_response(),
        Err(err) => {
            warn!("Product API request failed: {:#}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": format!("{:#}", err) })),
            )
                .into_response()
        }
    }
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
