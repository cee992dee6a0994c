//! # Connection Records
//!
//! A connection is a named credential record for an external system. Its
//! only lifecycle is the status field, which activation mutates in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The closed set of connection states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConnectionStatus {
    /// Freshly created, never activated.
    #[default]
    Inactive,
    /// The last activation attempt succeeded.
    Active,
    /// The last activation attempt failed.
    Failed,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Inactive => "Inactive",
            ConnectionStatus::Active => "Active",
            ConnectionStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Inactive" => Some(ConnectionStatus::Inactive),
            "Active" => Some(ConnectionStatus::Active),
            "Failed" => Some(ConnectionStatus::Failed),
            _ => None,
        }
    }
}

/// How a connection authenticates against its target system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Credentials,
    Oauth2,
    BrowserLogin,
}

impl ConnectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionKind::Credentials => "credentials",
            ConnectionKind::Oauth2 => "oauth2",
            ConnectionKind::BrowserLogin => "browser_login",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credentials" => Some(ConnectionKind::Credentials),
            "oauth2" => Some(ConnectionKind::Oauth2),
            "browser_login" => Some(ConnectionKind::BrowserLogin),
            _ => None,
        }
    }
}

/// A named credential record for an external system.
///
/// The `configuration` payload is opaque to the platform; only the
/// handler registered under `provider_slug`/`connection_slug` knows how
/// to deserialize it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub provider_slug: String,
    pub connection_slug: String,
    pub kind: ConnectionKind,
    pub status: ConnectionStatus,
    pub configuration: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Creates a fresh `Inactive` connection with a new v4 id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        provider_slug: impl Into<String>,
        connection_slug: impl Into<String>,
        kind: ConnectionKind,
        configuration: Value,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            provider_slug: provider_slug.into(),
            connection_slug: connection_slug.into(),
            kind,
            status: ConnectionStatus::Inactive,
            configuration,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mutates the status in place, touching `updated_at`.
    pub fn set_status(&mut self, status: ConnectionStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
