//! # SQLite Schema Definitions
//!
//! This module centralizes the table-creation SQL for the platform, so
//! the provider and the test fixtures build the exact same schema.

/// The `documents` table holds every chunk emitted by a data source run.
pub const CREATE_DOCUMENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS documents (
        id TEXT PRIMARY KEY,
        owner_id TEXT,
        source_url TEXT NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        content_key TEXT NOT NULL DEFAULT 'content',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
";

/// The `connections` table holds credential records and their last
/// activation status.
pub const CREATE_CONNECTIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS connections (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        provider_slug TEXT NOT NULL,
        connection_slug TEXT NOT NULL,
        kind TEXT NOT NULL,
        status TEXT NOT NULL,
        configuration TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
";

/// Every statement `initialize_schema` runs, in order.
pub const ALL_TABLE_CREATION_SQL: &[&str] =
    &[CREATE_DOCUMENTS_TABLE, CREATE_CONNECTIONS_TABLE];
