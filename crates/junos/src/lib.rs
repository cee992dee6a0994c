//! # ragstack-junos: Junos Device Login Plugin
//!
//! This crate provides the Juniper Junos device login as a connection
//! plugin for the ragstack platform. It implements the
//! `ConnectionHandler` trait from the core `ragstack` library: one
//! authenticated probe against the device, then the session is released
//! and the result is reported as a status change on the connection.

use async_trait::async_trait;
use ragstack::connections::{ActivationOutcome, Connection, ConnectionHandler, ConnectionKind};
use ragstack::ConnectionStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub mod client;

pub use client::{JunosClient, SystemInformation};

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum JunosError {
    #[error("Invalid connection configuration: {0}")]
    Configuration(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Failed to reach the device: {0}")]
    Connect(String),

    #[error("{0}")]
    Device(String),

    #[error("Failed to parse the device response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for JunosError {
    fn from(err: reqwest::Error) -> Self {
        JunosError::Connect(err.to_string())
    }
}

// --- Configuration ---

fn default_address() -> String {
    "localhost".to_string()
}

/// The default Junos REST service port.
fn default_port() -> u16 {
    3000
}

/// The credentials a Junos login connection carries in its
/// `configuration` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JunosLoginConfig {
    /// Address of the device.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port of the device's REST service.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username for the device.
    pub username: String,
    /// Password for the account.
    pub password: String,
}

// --- ConnectionHandler Implementation ---

/// The `ConnectionHandler` implementation for Junos device logins.
#[derive(Debug, Default, Clone, Copy)]
pub struct JunosLogin;

impl JunosLogin {
    pub fn new() -> Self {
        Self
    }

    /// Runs the single login attempt: deserialize the credentials, build
    /// the client, open the session. Dropping the client closes it.
    async fn try_login(&self, connection: &Connection) -> Result<SystemInformation, JunosError> {
        let config: JunosLoginConfig =
            serde_json::from_value(connection.configuration.clone())
                .map_err(|e| JunosError::Configuration(e.to_string()))?;

        let client = JunosClient::new(
            &config.address,
            config.port,
            &config.username,
            &config.password,
        )?;
        client.open().await
    }
}

#[async_trait]
impl ConnectionHandler for JunosLogin {
    fn name(&self) -> &'static str {
        "Junos Login"
    }

    fn slug(&self) -> &'static str {
        "junos_login"
    }

    fn provider_slug(&self) -> &'static str {
        "juniper"
    }

    fn description(&self) -> &'static str {
        "Login to a Junos Device"
    }

    fn kind(&self) -> ConnectionKind {
        ConnectionKind::Credentials
    }

    /// One attempt, binary outcome. Every failure inside the attempt is
    /// captured into the `Failed` outcome rather than propagated.
    async fn activate(&self, mut connection: Connection) -> ActivationOutcome {
        match self.try_login(&connection).await {
            Ok(facts) => {
                info!(
                    host_name = %facts.host_name,
                    model = %facts.hardware_model,
                    os_version = %facts.os_version,
                    "Junos device login succeeded"
                );
                connection.set_status(ConnectionStatus::Active);
                ActivationOutcome::Active(connection)
            }
            Err(e) => {
                warn!(error = %e, "Junos device login failed");
                connection.set_status(ConnectionStatus::Failed);
                ActivationOutcome::Failed {
                    error: e.to_string(),
                    connection,
                }
            }
        }
    }
}
