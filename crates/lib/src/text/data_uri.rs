//! # Data URI Parsing
//!
//! File uploads reach the data source handlers as `data:` URIs of the form
//! `data:<mime type>[;name=<file name>];base64,<payload>`. This module parses
//! that convention and decodes the payload on demand.

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DataUriError {
    #[error("Invalid data URI: {0}")]
    Malformed(String),

    #[error("Failed to decode base64 payload: {0}")]
    Base64(String),
}

/// A parsed `data:` URI.
///
/// The payload stays base64-encoded until [`decode`](ParsedDataUri::decode)
/// is called, so validation can inspect the mime type and file name without
/// paying for the decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDataUri {
    /// The declared mime type, e.g. `text/csv`.
    pub mime_type: String,
    /// The optional `name=` parameter carrying the original file name.
    pub file_name: Option<String>,
    /// The base64-encoded payload.
    pub data: String,
}

impl ParsedDataUri {
    /// Decodes the base64 payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| DataUriError::Base64(e.to_string()))
    }

    /// Returns the file name, or `default` when the URI carried no `name=`
    /// parameter.
    pub fn file_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.file_name.as_deref().unwrap_or(default)
    }
}

/// Parses a `data:` URI into its mime type, optional file name, and payload.
///
/// The expected shape is `data:<mime>;name=<file name>;base64,<payload>`,
/// with the `name=` parameter optional. Anything else is rejected as
/// malformed.
pub fn parse(uri: &str) -> Result<ParsedDataUri, DataUriError> {
    let re = Regex::new(r"^data:(?P<mime>[\w/.+-]+)(?:;name=(?P<name>[^;]*))?;base64,(?P<data>[\s\S]*)$")
        .map_err(|e| DataUriError::Malformed(format!("Regex compilation failed: {e}")))?;

    let caps = re
        .captures(uri)
        .ok_or_else(|| DataUriError::Malformed(uri.chars().take(64).collect()))?;

    let mime_type = caps["mime"].to_string();
    let file_name = caps
        .name("name")
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    let data = caps["data"].to_string();

    Ok(ParsedDataUri {
        mime_type,
        file_name,
        data,
    })
}

/// Builds a `data:` URI from raw bytes, the inverse of [`parse`].
pub fn build(mime_type: &str, file_name: &str, bytes: &[u8]) -> String {
    let encoded = general_purpose::STANDARD.encode(bytes);
    format!("data:{mime_type};name={file_name};base64,{encoded}")
}
