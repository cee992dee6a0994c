//! # Application State
//!
//! The shared state handed to every request handler: the resolved
//! configuration, the SQLite provider, and the two plugin registries.
//! It is assembled once at startup by [`build_app_state`].

use crate::config::AppConfig;
use ragstack::{providers::db::sqlite::SqliteProvider, ConnectionRegistry, DataSourceRegistry};
use ragstack_csv::CsvFileSource;
use ragstack_junos::JunosLogin;
use std::sync::Arc;
use tracing::info;

/// Shared resources cloned into every handler invocation.
#[derive(Clone)]
pub struct AppState {
    /// The resolved server settings.
    pub config: Arc<AppConfig>,
    /// Storage for documents and connection records.
    pub sqlite_provider: Arc<SqliteProvider>,
    /// Every data source plugin the server can ingest through.
    pub data_sources: Arc<DataSourceRegistry>,
    /// Every connection handler the server can activate.
    pub connection_handlers: Arc<ConnectionRegistry>,
}

/// Registers every plugin this build of the server ships with.
///
/// The registries are built once here and only read afterwards.
pub fn build_registries() -> (DataSourceRegistry, ConnectionRegistry) {
    let mut data_sources = DataSourceRegistry::new();
    data_sources.register(Arc::new(CsvFileSource::new()));

    let mut connection_handlers = ConnectionRegistry::new();
    connection_handlers.register(Arc::new(JunosLogin::new()));

    (data_sources, connection_handlers)
}

/// Assembles the state: storage first, then the plugin registries.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let sqlite_provider = SqliteProvider::new(&config.db_url).await?;
    info!(db_url = %config.db_url, "Opened the SQLite provider");
    // Schema creation is idempotent, so run it on every boot.
    sqlite_provider.initialize_schema().await?;

    let (data_sources, connection_handlers) = build_registries();
    info!(
        data_sources = data_sources.len(),
        connection_handlers = connection_handlers.len(),
        "Registered plugins"
    );

    Ok(AppState {
        config: Arc::new(config),
        sqlite_provider: Arc::new(sqlite_provider),
        data_sources: Arc::new(data_sources),
        connection_handlers: Arc::new(connection_handlers),
    })
}
