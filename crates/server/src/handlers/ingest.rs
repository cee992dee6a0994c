//! # Ingestion Route Handlers
//!
//! Listing the registered data sources and driving one of them through
//! the validate / documents / store pipeline.

use super::{AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use ragstack::datasource::{storage::store_documents, DataSourceDescriptor};
use ragstack::IngestionSummary;
use serde_json::Value;
use tracing::info;

/// The handler for the `GET /datasources` endpoint.
pub async fn list_data_sources(
    State(app_state): State<AppState>,
) -> Json<Vec<DataSourceDescriptor>> {
    Json(app_state.data_sources.descriptors())
}

/// The handler for the `POST /ingest/{slug}` endpoint.
///
/// Dispatches the opaque input map to the data source registered under
/// `slug`, then stores every document it produces.
pub async fn ingest_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<IngestionSummary>, AppError> {
    let data_source = app_state.data_sources.get(&slug).ok_or_else(|| {
        AppError::NotFound(format!("No data source registered for slug '{slug}'."))
    })?;

    let entries = data_source.validate_and_process(&payload)?;
    info!(slug = %slug, entries = entries.len(), "Validated ingestion input");

    let mut conn = app_state.sqlite_provider.db.connect()?;

    let mut document_ids = Vec::new();
    for entry in &entries {
        let documents = data_source.documents(entry).await?;
        let ids = store_documents(&mut conn, &documents, &entry.name, None).await?;
        document_ids.extend(ids);
    }

    // The reported source is the first entry's name, e.g. the uploaded
    // file name, falling back to the slug when validation produced none.
    let source = entries
        .first()
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| slug.clone());

    let summary = IngestionSummary {
        source,
        entries_processed: entries.len(),
        documents_added: document_ids.len(),
        document_ids,
    };
    info!(
        source = %summary.source,
        documents_added = summary.documents_added,
        "Ingestion complete"
    );

    Ok(Json(summary))
}
