//! # API Error Handling
//!
//! `AppError` is the one error type the handlers return. Its
//! `IntoResponse` impl maps each failure onto a status code and a JSON
//! `{"error": ...}` body, logging the original error before a message
//! leaves the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ragstack::{connections::ConnectionError, DataSourceError};
use serde_json::json;
use tracing::error;

/// Every failure a handler can surface.
pub enum AppError {
    /// Errors from a data source plugin or the document pipeline.
    DataSource(DataSourceError),
    /// Errors from the connection record storage.
    Connection(ConnectionError),
    /// A requested slug has no registered handler.
    NotFound(String),
    /// Anything unexpected, reported to the client without detail.
    Internal(anyhow::Error),
}

impl From<DataSourceError> for AppError {
    fn from(err: DataSourceError) -> Self {
        AppError::DataSource(err)
    }
}

impl From<ConnectionError> for AppError {
    fn from(err: ConnectionError) -> Self {
        AppError::Connection(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<turso::Error> for AppError {
    fn from(err: turso::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::DataSource(err) => {
                error!(error = ?err, "Data source request failed");
                match err {
                    // The input map was rejected before any work happened.
                    DataSourceError::InvalidInput(_)
                    | DataSourceError::Extract(_)
                    | DataSourceError::Split(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                    DataSourceError::Database(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("A database operation failed: {e}"),
                    ),
                    DataSourceError::Internal(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected internal error occurred.".to_string(),
                    ),
                }
            }
            AppError::Connection(err) => {
                error!(error = ?err, "Connection storage request failed");
                match err {
                    ConnectionError::NotFound(id) => (
                        StatusCode::NOT_FOUND,
                        format!("Connection '{id}' not found."),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Connection storage error: {other}"),
                    ),
                }
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                error!(error = ?err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status_code, body).into_response()
    }
}
