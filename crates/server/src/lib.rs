//! # ragstack-server
//!
//! The HTTP surface of the ragstack platform. It wires the plugin
//! registries and the SQLite provider into an Axum application that
//! exposes data source ingestion and connection activation endpoints.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use crate::{
    config::{get_config, AppConfig},
    router::create_router,
    state::build_app_state,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Serves the application on an already-bound listener.
///
/// Taking the listener as an argument keeps this callable from tests,
/// which bind to an ephemeral port before handing it over.
pub async fn run(listener: TcpListener, config: AppConfig) -> anyhow::Result<()> {
    debug!(?config, "Resolved server configuration");

    let app_state = build_app_state(config).await?;
    let app = create_router(app_state);

    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Boots the server from the environment: dotenv, tracing, the config
/// file, then a listener on the configured port.
pub async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = get_config(None)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    run(listener, config).await
}
