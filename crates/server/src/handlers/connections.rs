//! # Connection Route Handlers
//!
//! Listing the registered connection handlers and activating a connection
//! through one of them. An activation that fails against the target system
//! is still an HTTP 200: the failure is reported in the outcome body, not
//! as a server error.

use super::{AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use ragstack::connections::{storage::save_connection, ConnectionHandlerDescriptor};
use ragstack::{ActivationOutcome, Connection};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// The request body for the activation endpoint.
///
/// Only `configuration` matters to the handler; `name` and `description`
/// label the stored record and default sensibly when omitted.
#[derive(Deserialize)]
pub struct ActivateConnectionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub configuration: Value,
}

/// The handler for the `GET /connections` endpoint.
pub async fn list_connection_handlers(
    State(app_state): State<AppState>,
) -> Json<Vec<ConnectionHandlerDescriptor>> {
    Json(app_state.connection_handlers.descriptors())
}

/// The handler for the `POST /connections/{provider_slug}/{slug}/activate`
/// endpoint.
///
/// Builds a fresh `Inactive` connection from the request, runs the single
/// activation attempt, persists the resulting record, and returns the
/// outcome.
pub async fn activate_connection_handler(
    State(app_state): State<AppState>,
    Path((provider_slug, slug)): Path<(String, String)>,
    Json(payload): Json<ActivateConnectionRequest>,
) -> Result<Json<ActivationOutcome>, AppError> {
    let handler = app_state
        .connection_handlers
        .get(&provider_slug, &slug)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No connection handler registered for '{provider_slug}/{slug}'."
            ))
        })?;

    let connection = Connection::new(
        payload.name.unwrap_or_else(|| handler.name().to_string()),
        payload.description.unwrap_or_default(),
        handler.provider_slug(),
        handler.slug(),
        handler.kind(),
        payload.configuration,
    );
    info!(
        connection_id = %connection.id,
        handler = %format!("{provider_slug}/{slug}"),
        "Activating connection"
    );

    let outcome = handler.activate(connection).await;

    // Persist whichever status the attempt produced.
    let conn = app_state.sqlite_provider.db.connect()?;
    save_connection(&conn, outcome.connection()).await?;
    info!(
        connection_id = %outcome.connection().id,
        active = outcome.is_active(),
        "Stored activation outcome"
    );

    Ok(Json(outcome))
}
