//! # HTTP Routes
//!
//! Maps the API surface onto the handler functions. Uploads arrive
//! base64-encoded inside a JSON body, so the ingest route carries a
//! body limit sized above the decoded file cap.

use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// The request body cap for ingestion uploads, sized for the base64
/// rendering of the largest accepted file.
const INGEST_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Builds the application router over the shared state.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/datasources", get(handlers::list_data_sources))
        .route(
            "/ingest/{slug}",
            post(handlers::ingest_handler).layer(DefaultBodyLimit::max(INGEST_BODY_LIMIT)),
        )
        .route("/connections", get(handlers::list_connection_handlers))
        .route(
            "/connections/{provider_slug}/{slug}/activate",
            post(handlers::activate_connection_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
