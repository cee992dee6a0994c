//! # ragstack-csv: CSV File Data Source Plugin
//!
//! This crate provides the CSV file data source as a plugin for the
//! ragstack platform. It implements the `DataSource` trait from the core
//! `ragstack` library: validation rejects anything that is not a
//! `text/csv` upload, and the document step chunks the rows under a
//! fixed token budget.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use ragstack::datasource::{DataSource, DataSourceEntryItem, DataSourceError};
use ragstack::text::{
    data_uri, extract_text, CsvTextSplitter, DataUriError, ExtractError, SplitError,
};
use ragstack::vectorstore::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// The token budget for a single chunk. Kept deliberately small so each
/// CSV record lands in its own document.
pub const CHUNK_TOKEN_BUDGET: usize = 2;

/// The largest accepted decoded upload, in bytes.
pub const MAX_FILE_SIZE_BYTES: usize = 20_000_000;

/// The file name used when the data URI carries no `name=` parameter.
pub const DEFAULT_FILE_NAME: &str = "untitled.csv";

const CSV_MIME_TYPE: &str = "text/csv";

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum CsvSourceError {
    #[error("Invalid input for the CSV source: {0}")]
    InvalidInput(String),

    #[error("Invalid mime type: {0}, expected: text/csv")]
    MimeType(String),

    #[error("File of {0} bytes exceeds the {MAX_FILE_SIZE_BYTES} byte limit")]
    TooLarge(usize),

    #[error("Invalid data URI: {0}")]
    DataUri(#[from] DataUriError),

    #[error("Failed to decode Base64 file data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Text extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("CSV splitting failed: {0}")]
    Split(#[from] SplitError),

    #[error("Payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A helper to convert the specific `CsvSourceError` into the generic
/// `ragstack::datasource::DataSourceError`.
impl From<CsvSourceError> for DataSourceError {
    fn from(err: CsvSourceError) -> Self {
        match err {
            CsvSourceError::InvalidInput(s) => DataSourceError::InvalidInput(s),
            CsvSourceError::MimeType(_)
            | CsvSourceError::TooLarge(_)
            | CsvSourceError::DataUri(_)
            | CsvSourceError::Base64(_) => DataSourceError::InvalidInput(err.to_string()),
            CsvSourceError::Extract(e) => DataSourceError::Extract(e.to_string()),
            CsvSourceError::Split(e) => DataSourceError::Split(e.to_string()),
            CsvSourceError::Payload(e) => {
                DataSourceError::Internal(anyhow::anyhow!("Payload serialization failed: {e}"))
            }
        }
    }
}

// --- Data Structures ---

/// The input schema for the CSV source: one `file` field holding the
/// upload as a `data:text/csv;name=...;base64,...` URI.
#[derive(Debug, Deserialize)]
pub struct CsvFileConfig {
    pub file: String,
}

/// The payload map a validated entry carries into the document step.
#[derive(Debug, Serialize, Deserialize)]
struct CsvFilePayload {
    mime_type: String,
    file_name: String,
    file_data: String,
}

/// Rejects payloads whose decoded size would exceed the upload limit.
///
/// Base64 encodes three bytes into four characters, so the decoded size
/// can be bounded from the encoded length without decoding.
fn check_file_size(encoded_len: usize) -> Result<(), CsvSourceError> {
    let decoded_estimate = encoded_len / 4 * 3;
    if decoded_estimate > MAX_FILE_SIZE_BYTES {
        return Err(CsvSourceError::TooLarge(decoded_estimate));
    }
    Ok(())
}

// --- DataSource Implementation ---

/// The `DataSource` implementation for CSV file uploads.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFileSource;

impl CsvFileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataSource for CsvFileSource {
    fn name(&self) -> &'static str {
        "csv_file"
    }

    fn slug(&self) -> &'static str {
        "csv_file"
    }

    fn description(&self) -> &'static str {
        "Chunks an uploaded CSV file into one document per group of rows"
    }

    /// Validates the upload and wraps it into a single entry.
    ///
    /// Only `text/csv` uploads are accepted; anything else is rejected
    /// outright, with no retry. The payload stays base64 encoded until
    /// the document step.
    fn validate_and_process(
        &self,
        input: &Value,
    ) -> Result<Vec<DataSourceEntryItem>, DataSourceError> {
        let config: CsvFileConfig = serde_json::from_value(input.clone())
            .map_err(|e| CsvSourceError::InvalidInput(format!("bad input map: {e}")))?;

        let parsed = data_uri::parse(&config.file).map_err(CsvSourceError::from)?;
        if parsed.mime_type != CSV_MIME_TYPE {
            return Err(CsvSourceError::MimeType(parsed.mime_type).into());
        }
        check_file_size(parsed.data.len())?;

        let file_name = parsed.file_name_or(DEFAULT_FILE_NAME).to_string();
        let payload = CsvFilePayload {
            mime_type: parsed.mime_type,
            file_name: file_name.clone(),
            file_data: parsed.data,
        };
        let data = serde_json::to_value(&payload).map_err(CsvSourceError::from)?;

        Ok(vec![DataSourceEntryItem::new(file_name, data)])
    }

    /// Decodes one validated entry, chunks the rows, and wraps each
    /// chunk as a document tagged with the source file name.
    async fn documents(
        &self,
        entry: &DataSourceEntryItem,
    ) -> Result<Vec<Document>, DataSourceError> {
        let payload: CsvFilePayload = serde_json::from_value(entry.data.clone())
            .map_err(|e| CsvSourceError::InvalidInput(format!("bad entry payload: {e}")))?;

        info!(
            file_name = %payload.file_name,
            mime_type = %payload.mime_type,
            "Processing CSV file"
        );

        let bytes = general_purpose::STANDARD
            .decode(&payload.file_data)
            .map_err(CsvSourceError::from)?;
        let text = extract_text(&payload.mime_type, bytes, &payload.file_name)
            .map_err(CsvSourceError::from)?;
        let chunks = CsvTextSplitter::new(CHUNK_TOKEN_BUDGET)
            .split(&text)
            .map_err(CsvSourceError::from)?;

        let documents = chunks
            .into_iter()
            .map(|chunk| {
                let mut metadata = HashMap::new();
                metadata.insert("source".to_string(), payload.file_name.clone());
                Document::new(self.content_key(), chunk, metadata)
            })
            .collect();

        Ok(documents)
    }
}
