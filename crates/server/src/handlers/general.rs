//! # General Route Handlers
//!
//! The root banner and health check endpoints.

/// Serves the banner on `/`.
pub async fn root() -> &'static str {
    "ragstack server is running."
}

/// Serves the liveness probe on `/health`.
pub async fn health_check() -> &'static str {
    "OK"
}
