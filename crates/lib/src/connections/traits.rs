//! # The Connection Handler Contract
//!
//! Connection handlers probe an external system with a connection's
//! credentials and report the result as a status change. Activation is a
//! single attempt with a binary outcome; failures are captured into the
//! outcome instead of propagating as errors.

use crate::connections::models::{Connection, ConnectionKind};
use async_trait::async_trait;
use serde::Serialize;

/// The result of one activation attempt.
///
/// Serialized untagged: an `Active` outcome is the connection record
/// itself, a `Failed` outcome is an `{error, connection}` map carrying
/// the captured error message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActivationOutcome {
    Active(Connection),
    Failed {
        error: String,
        connection: Connection,
    },
}

impl ActivationOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, ActivationOutcome::Active(_))
    }

    /// The connection carried by either outcome.
    pub fn connection(&self) -> &Connection {
        match self {
            ActivationOutcome::Active(connection) => connection,
            ActivationOutcome::Failed { connection, .. } => connection,
        }
    }

    /// The captured error message, when the attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ActivationOutcome::Active(_) => None,
            ActivationOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// The contract a connection plugin fulfils.
#[async_trait]
pub trait ConnectionHandler: Send + Sync {
    /// Human-readable handler name, e.g. "Junos Login".
    fn name(&self) -> &'static str;

    /// Stable slug used for registry lookup, unique within the provider.
    fn slug(&self) -> &'static str;

    /// The provider this handler belongs to, e.g. "juniper".
    fn provider_slug(&self) -> &'static str;

    /// One-line description of what the handler connects to.
    fn description(&self) -> &'static str;

    fn kind(&self) -> ConnectionKind;

    /// Runs one activation attempt against the external system.
    ///
    /// Takes ownership of the connection, mutates its status, and hands
    /// it back inside the outcome. This method never returns a Rust
    /// error: anything that goes wrong during the attempt becomes a
    /// `Failed` outcome carrying the error's display message.
    async fn activate(&self, connection: Connection) -> ActivationOutcome;
}
