//! # Shared Data Source Types
//!
//! The intermediate record passed between the validation and document
//! steps, and the summary returned once an ingestion run completes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of validated input, produced by `validate_and_process` and
/// consumed by the document step.
///
/// The payload map is opaque to the platform. For file-backed sources it
/// carries `mime_type`, `file_name`, and `file_data` (the still-encoded
/// bytes); only the plugin that emitted the entry knows how to read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSourceEntryItem {
    /// Display name for the entry, e.g. the uploaded file name.
    pub name: String,
    /// The opaque payload map.
    #[serde(default)]
    pub data: Value,
}

impl DataSourceEntryItem {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A standardized summary of a completed ingestion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestionSummary {
    /// The source identifier that was processed, e.g. the file name.
    pub source: String,
    /// How many validated entries the input produced.
    pub entries_processed: usize,
    /// How many documents were stored.
    pub documents_added: usize,
    /// The unique IDs of the stored documents.
    pub document_ids: Vec<String>,
}
