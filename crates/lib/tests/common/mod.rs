#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the core library tests: tracing setup and mock
//! plugin implementations for exercising the registries.

use async_trait::async_trait;
use ragstack::connections::{ActivationOutcome, Connection, ConnectionHandler, ConnectionKind};
use ragstack::datasource::{DataSource, DataSourceEntryItem, DataSourceError};
use ragstack::vectorstore::Document;
use ragstack::ConnectionStatus;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Once, RwLock};

#[cfg(test)]
static INIT: Once = Once::new();

/// Installs the tracing subscriber once per test binary.
#[cfg(test)]
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

// --- Mock Data Source for Registry and Pipeline Testing ---

/// A minimal data source that accepts `{"text": "..."}` and emits one
/// document per line.
pub struct MockLineSource;

#[async_trait]
impl DataSource for MockLineSource {
    fn name(&self) -> &'static str {
        "mock_lines"
    }

    fn slug(&self) -> &'static str {
        "mock_lines"
    }

    fn description(&self) -> &'static str {
        "Splits plain text into one document per line"
    }

    fn validate_and_process(
        &self,
        input: &Value,
    ) -> Result<Vec<DataSourceEntryItem>, DataSourceError> {
        let text = input
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| DataSourceError::InvalidInput("missing 'text' field".to_string()))?;
        Ok(vec![DataSourceEntryItem::new(
            "inline-text",
            json!({ "text": text }),
        )])
    }

    async fn documents(
        &self,
        entry: &DataSourceEntryItem,
    ) -> Result<Vec<Document>, DataSourceError> {
        let text = entry
            .data
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| DataSourceError::InvalidInput("missing 'text' payload".to_string()))?;

        let docs = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut metadata = HashMap::new();
                metadata.insert("source".to_string(), entry.name.clone());
                Document::new(self.content_key(), line, metadata)
            })
            .collect();
        Ok(docs)
    }
}

// --- Mock Connection Handler for Registry Testing ---

/// A connection handler that records every activation and reports the
/// outcome it was configured with.
pub struct MockProbeHandler {
    pub should_succeed: bool,
    pub activations: Arc<RwLock<Vec<String>>>,
}

impl MockProbeHandler {
    pub fn new(should_succeed: bool) -> Self {
        Self {
            should_succeed,
            activations: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ConnectionHandler for MockProbeHandler {
    fn name(&self) -> &'static str {
        "Mock Probe"
    }

    fn slug(&self) -> &'static str {
        "mock_probe"
    }

    fn provider_slug(&self) -> &'static str {
        "mock"
    }

    fn description(&self) -> &'static str {
        "Always reports the configured outcome"
    }

    fn kind(&self) -> ConnectionKind {
        ConnectionKind::Credentials
    }

    async fn activate(&self, mut connection: Connection) -> ActivationOutcome {
        self.activations
            .write()
            .unwrap()
            .push(connection.id.clone());

        if self.should_succeed {
            connection.set_status(ConnectionStatus::Active);
            ActivationOutcome::Active(connection)
        } else {
            connection.set_status(ConnectionStatus::Failed);
            ActivationOutcome::Failed {
                error: "mock probe refused".to_string(),
                connection,
            }
        }
    }
}
