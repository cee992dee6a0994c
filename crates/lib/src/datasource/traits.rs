//! # The Data Source Plugin Contract
//!
//! Every data source crate implements [`DataSource`] and maps its own
//! error type into [`DataSourceError`], so the platform can drive all
//! sources through one interface.

use crate::datasource::types::DataSourceEntryItem;
use crate::vectorstore::{self, Document};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A generic error type for all data source plugins.
///
/// Each plugin maps its specific errors (bad mime type, malformed data
/// URI, CSV parse failure) into these standardized variants so the core
/// library and the server can handle them uniformly.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Invalid input for the data source: {0}")]
    InvalidInput(String),

    #[error("Failed to extract text from the source: {0}")]
    Extract(String),

    #[error("Failed to split the extracted text: {0}")]
    Split(String),

    #[error("A database operation failed during ingestion: {0}")]
    Database(#[from] turso::Error),

    #[error("An unexpected internal error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

/// The contract a data source plugin fulfils.
///
/// A source is driven in two steps: `validate_and_process` turns the raw
/// input map into validated entries (rejecting anything malformed), and
/// `documents` turns one entry into the chunked documents destined for
/// the vector store.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable handler name, e.g. "csv_file".
    fn name(&self) -> &'static str;

    /// Stable slug used for registry lookup and routing.
    fn slug(&self) -> &'static str;

    /// One-line description of what the source ingests.
    fn description(&self) -> &'static str;

    /// The vector store property the chunk text is stored under.
    fn content_key(&self) -> &'static str {
        "content"
    }

    /// The vector store class definition for this source.
    fn class_schema(&self, class_name: &str) -> Value {
        vectorstore::class_schema(class_name, self.content_key())
    }

    /// Validates the raw input map and splits it into processable entries.
    ///
    /// Invalid input is rejected here, before any document work happens.
    fn validate_and_process(
        &self,
        input: &Value,
    ) -> Result<Vec<DataSourceEntryItem>, DataSourceError>;

    /// Produces the documents for one validated entry.
    async fn documents(
        &self,
        entry: &DataSourceEntryItem,
    ) -> Result<Vec<Document>, DataSourceError>;
}
