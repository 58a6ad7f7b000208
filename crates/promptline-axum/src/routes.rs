//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// CORS for the browser front end. Methods and headers are always open; only
/// the origin list narrows. Origins were validated by `AppConfig`, so every
/// configured origin reaches the layer.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config {
        CorsConfig::AllowAll => layer.allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => layer.allow_origin(origins.clone()),
    }
}

/// Prompt and monitoring routes, mounted both at the root and under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/validatePrompt", post(handlers::prompt::validate))
        .route("/generateResponse", post(handlers::prompt::generate))
        .route("/monitoring", get(handlers::monitoring::snapshot))
}

/// Create the main Axum router.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes())
        .nest("/api", api_routes())
        .with_state(state)
        .layer(cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
