//! # Persistence Tests
//!
//! Covers the SQLite provider schema setup, document storage, and the
//! connection record round trip. Each test uses an isolated in-memory
//! database.

mod common;

use crate::common::setup_tracing;
use anyhow::Result;
use ragstack::connections::storage::{get_connection, list_connections, save_connection};
use ragstack::connections::ConnectionError;
use ragstack::datasource::storage::store_documents;
use ragstack::providers::db::sqlite::SqliteProvider;
use ragstack::vectorstore::Document;
use ragstack::{Connection, ConnectionKind, ConnectionStatus};
use serde_json::json;
use std::collections::HashMap;

fn sample_documents(file_name: &str, chunks: &[&str]) -> Vec<Document> {
    chunks
        .iter()
        .map(|chunk| {
            let mut metadata = HashMap::new();
            metadata.insert("source".to_string(), file_name.to_string());
            Document::new("content", *chunk, metadata)
        })
        .collect()
}

#[tokio::test]
async fn test_store_documents_assigns_stable_ids() -> Result<()> {
    setup_tracing();

    // Arrange
    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;
    let documents = sample_documents("team.csv", &["name: Alice", "name: Bob"]);

    // Act: store the same documents twice, as a re-ingest would.
    let mut conn = provider.db.connect()?;
    let first = store_documents(&mut conn, &documents, "team.csv", None).await?;
    let second = store_documents(&mut conn, &documents, "team.csv", None).await?;

    // Assert: ids are derived from the source and chunk index, so the
    // second run overwrites instead of duplicating.
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);

    let mut rows = conn
        .query("SELECT COUNT(*) FROM documents", ())
        .await?;
    let row = rows.next().await?.expect("count row");
    match row.get_value(0)? {
        turso::Value::Integer(count) => assert_eq!(count, 2),
        other => panic!("expected integer count, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_store_documents_empty_input_is_a_no_op() -> Result<()> {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;

    let mut conn = provider.db.connect()?;
    let stored = store_documents(&mut conn, &[], "empty.csv", None).await?;
    assert!(stored.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_connection_round_trip_preserves_record() -> Result<()> {
    setup_tracing();

    // Arrange
    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;
    let conn = provider.db.connect()?;

    let mut record = Connection::new(
        "lab router",
        "rack 3 test device",
        "juniper",
        "junos_login",
        ConnectionKind::Credentials,
        json!({"address": "10.0.0.1", "username": "admin"}),
    );
    record.set_status(ConnectionStatus::Active);

    // Act
    save_connection(&conn, &record).await?;
    let loaded = get_connection(&conn, &record.id).await?;

    // Assert
    assert_eq!(loaded.id, record.id);
    assert_eq!(loaded.name, "lab router");
    assert_eq!(loaded.kind, ConnectionKind::Credentials);
    assert_eq!(loaded.status, ConnectionStatus::Active);
    assert_eq!(loaded.configuration["address"], "10.0.0.1");

    Ok(())
}

#[tokio::test]
async fn test_save_connection_upserts_status() -> Result<()> {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;
    let conn = provider.db.connect()?;

    let mut record = Connection::new(
        "flaky device",
        "",
        "juniper",
        "junos_login",
        ConnectionKind::Credentials,
        json!({}),
    );
    save_connection(&conn, &record).await?;

    // A failed activation updates the same row.
    record.set_status(ConnectionStatus::Failed);
    save_connection(&conn, &record).await?;

    let all = list_connections(&conn).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, ConnectionStatus::Failed);

    Ok(())
}

#[tokio::test]
async fn test_get_connection_unknown_id_is_not_found() -> Result<()> {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;
    let conn = provider.db.connect()?;

    let err = get_connection(&conn, "no-such-id").await.unwrap_err();
    assert!(matches!(err, ConnectionError::NotFound(id) if id == "no-such-id"));

    Ok(())
}
