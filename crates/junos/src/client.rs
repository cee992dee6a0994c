//! # Junos REST Client
//!
//! A thin driver for the Junos REST API. Logging in means one
//! authenticated RPC against the device; dropping the client releases
//! the session. There is no timeout and no retry here: one attempt, one
//! outcome.

use crate::JunosError;
use reqwest::header::ACCEPT;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::debug;

/// The device facts returned by the `get-system-information` RPC.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInformation {
    #[serde(rename = "host-name", default)]
    pub host_name: String,
    #[serde(rename = "hardware-model", default)]
    pub hardware_model: String,
    #[serde(rename = "os-name", default)]
    pub os_name: String,
    #[serde(rename = "os-version", default)]
    pub os_version: String,
    #[serde(rename = "serial-number", default)]
    pub serial_number: String,
}

#[derive(Debug, Deserialize)]
struct SystemInformationResponse {
    #[serde(rename = "system-information")]
    system_information: SystemInformation,
}

/// A client for one Junos device, holding its address and credentials.
#[derive(Debug, Clone)]
pub struct JunosClient {
    client: ReqwestClient,
    base_url: String,
    username: String,
    password: String,
}

impl JunosClient {
    /// Creates a client for the device's REST service.
    pub fn new(
        address: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, JunosError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(|e| JunosError::ClientBuild(e.to_string()))?;
        Ok(Self {
            client,
            base_url: format!("http://{address}:{port}"),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Opens a session by running the `get-system-information` RPC with
    /// HTTP basic auth.
    ///
    /// Any failure along the way (connect, authentication, unexpected
    /// status, unparseable body) is an error; a successful round trip
    /// proves the credentials and returns the device facts.
    pub async fn open(&self) -> Result<SystemInformation, JunosError> {
        let url = format!("{}/rpc/get-system-information", self.base_url);
        debug!(url = %url, "Probing Junos device");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(JunosError::Device(format!(
                "Device request failed with status: {}",
                response.status()
            )));
        }

        let parsed: SystemInformationResponse = response
            .json()
            .await
            .map_err(|e| JunosError::Parse(e.to_string()))?;

        Ok(parsed.system_information)
    }
}
