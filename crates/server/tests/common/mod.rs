//! # Integration Test Harness
//!
//! `TestApp` boots the real server stack for one test: a throwaway
//! SQLite file, a config file pointing at it, the router on an ephemeral
//! port, and an `httpmock::MockServer` standing in for external systems
//! such as the Junos REST service.

// Not every test binary uses every helper.
#![allow(unused)]

use anyhow::{bail, Context, Result};
use httpmock::MockServer;
use ragstack_server::{config::get_config, router::create_router, state::build_app_state};
use reqwest::Client;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{tempdir, NamedTempFile, TempDir};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// One running server instance plus everything it needs torn down with it.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub db_path: PathBuf,
    _db_guard: NamedTempFile,
    _config_guard: TempDir,
    server_task: JoinHandle<()>,
    stop: Option<oneshot::Sender<()>>,
}

/// Writes a minimal `config.yml` into `dir` and returns its path.
///
/// Routing startup through the real config loader keeps the tests on
/// the same code path as the binary.
fn write_config_file(dir: &Path, db_path: &Path) -> Result<PathBuf> {
    let db_url = db_path
        .to_str()
        .context("temporary db path is not valid utf-8")?;
    let config_path = dir.join("config.yml");
    std::fs::write(&config_path, format!("port: 0\ndb_url: \"{db_url}\"\n"))?;
    Ok(config_path)
}

fn init_tracing() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

impl TestApp {
    /// Boots the full stack and waits until the health endpoint answers.
    pub async fn spawn() -> Result<Self> {
        init_tracing();

        let mock_server = MockServer::start();

        let db_guard = NamedTempFile::new()?;
        let db_path = db_guard.path().to_path_buf();
        let config_guard = tempdir()?;
        let config_path = write_config_file(config_guard.path(), &db_path)?;

        let config = get_config(config_path.to_str())?;
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let local_addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{local_addr}");

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server_task = tokio::spawn(async move {
            let outcome = axum::serve(listener, create_router(app_state))
                .with_graceful_shutdown(async {
                    stop_rx.await.ok();
                })
                .await;
            if let Err(e) = outcome {
                tracing::error!(error = %e, "test server exited with an error");
            }
        });

        let client = Client::new();
        wait_until_healthy(&client, &address).await?;

        Ok(Self {
            address,
            client,
            mock_server,
            db_path,
            _db_guard: db_guard,
            _config_guard: config_guard,
            server_task,
            stop: Some(stop_tx),
        })
    }
}

/// Polls `/health` until the server answers, or gives up.
async fn wait_until_healthy(client: &Client, address: &str) -> Result<()> {
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{address}/health")).send().await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    bail!("server at {address} never became healthy");
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
