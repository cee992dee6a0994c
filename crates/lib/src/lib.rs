//! # Ragstack Core
//!
//! This crate provides the shared foundation for the ragstack data
//! platform: the plugin contracts for data sources and connections, the
//! registries that hold them, the document model destined for a vector
//! store, shared text utilities (data URIs, extraction, CSV chunking),
//! and the SQLite persistence layer.
//!
//! Concrete plugins live in their own crates (e.g. the CSV file source
//! and the Junos device login) and plug in through the traits defined
//! here.

pub mod connections;
pub mod datasource;
pub mod errors;
pub mod providers;
pub mod text;
pub mod vectorstore;

pub use connections::{
    ActivationOutcome, Connection, ConnectionHandler, ConnectionKind, ConnectionRegistry,
    ConnectionStatus,
};
pub use datasource::{
    DataSource, DataSourceEntryItem, DataSourceError, DataSourceRegistry, IngestionSummary,
};
pub use errors::StorageError;
pub use providers::db::SqliteProvider;
pub use vectorstore::Document;
