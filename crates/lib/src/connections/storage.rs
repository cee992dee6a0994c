//! # Connection Persistence
//!
//! Saves and loads connection records from the `connections` table. The
//! server persists every activation outcome, so the stored status always
//! reflects the last attempt.

use crate::connections::models::{Connection, ConnectionKind, ConnectionStatus};
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use turso::{params, Connection as DbConnection, Value as TursoValue};

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("A database operation failed: {0}")]
    Database(#[from] turso::Error),

    #[error("Failed to serialize connection configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Connection not found: {0}")]
    NotFound(String),

    #[error("Stored connection record is invalid: {0}")]
    InvalidRecord(String),
}

/// Upserts a connection record.
pub async fn save_connection(
    conn: &DbConnection,
    connection: &Connection,
) -> Result<(), ConnectionError> {
    let configuration = serde_json::to_string(&connection.configuration)?;
    conn.execute(
        "INSERT OR REPLACE INTO connections
         (id, name, description, provider_slug, connection_slug, kind, status, configuration, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            connection.id.clone(),
            connection.name.clone(),
            connection.description.clone(),
            connection.provider_slug.clone(),
            connection.connection_slug.clone(),
            connection.kind.as_str(),
            connection.status.as_str(),
            configuration,
            connection.created_at.to_rfc3339(),
            connection.updated_at.to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}

/// Loads a connection by id.
pub async fn get_connection(
    conn: &DbConnection,
    id: &str,
) -> Result<Connection, ConnectionError> {
    let mut rows = conn
        .query(
            "SELECT id, name, description, provider_slug, connection_slug, kind, status, configuration, created_at, updated_at
             FROM connections WHERE id = ?",
            params![id],
        )
        .await?;

    match rows.next().await? {
        Some(row) => connection_from_row(&row),
        None => Err(ConnectionError::NotFound(id.to_string())),
    }
}

/// Loads every stored connection, newest first.
pub async fn list_connections(conn: &DbConnection) -> Result<Vec<Connection>, ConnectionError> {
    let mut rows = conn
        .query(
            "SELECT id, name, description, provider_slug, connection_slug, kind, status, configuration, created_at, updated_at
             FROM connections ORDER BY created_at DESC",
            (),
        )
        .await?;

    let mut connections = Vec::new();
    while let Some(row) = rows.next().await? {
        connections.push(connection_from_row(&row)?);
    }
    Ok(connections)
}

fn text_column(row: &turso::Row, index: usize) -> Result<String, ConnectionError> {
    match row.get_value(index)? {
        TursoValue::Text(s) => Ok(s),
        other => Err(ConnectionError::InvalidRecord(format!(
            "expected text at column {index}, got {other:?}"
        ))),
    }
}

fn timestamp_column(row: &turso::Row, index: usize) -> Result<DateTime<Utc>, ConnectionError> {
    let text = text_column(row, index)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ConnectionError::InvalidRecord(format!("bad timestamp '{text}': {e}")))
}

fn connection_from_row(row: &turso::Row) -> Result<Connection, ConnectionError> {
    let kind_text = text_column(row, 5)?;
    let kind = ConnectionKind::parse(&kind_text).ok_or_else(|| {
        ConnectionError::InvalidRecord(format!("unknown connection kind '{kind_text}'"))
    })?;

    let status_text = text_column(row, 6)?;
    let status = ConnectionStatus::parse(&status_text).ok_or_else(|| {
        ConnectionError::InvalidRecord(format!("unknown connection status '{status_text}'"))
    })?;

    let configuration: Value = serde_json::from_str(&text_column(row, 7)?)?;

    Ok(Connection {
        id: text_column(row, 0)?,
        name: text_column(row, 1)?,
        description: text_column(row, 2)?,
        provider_slug: text_column(row, 3)?,
        connection_slug: text_column(row, 4)?,
        kind,
        status,
        configuration,
        created_at: timestamp_column(row, 8)?,
        updated_at: timestamp_column(row, 9)?,
    })
}
