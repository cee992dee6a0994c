//! # Text Extraction
//!
//! Turns raw uploaded bytes into text, dispatching on the declared mime
//! type. Only text-based mime types are supported here; binary formats get
//! their own plugin crates.

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported mime type for text extraction: {0}")]
    UnsupportedMime(String),

    #[error("Content of '{file_name}' is not valid UTF-8: {source}")]
    Encoding {
        file_name: String,
        source: std::string::FromUtf8Error,
    },
}

/// Extracts text from raw bytes according to their mime type.
///
/// `text/csv`, `text/plain`, and `text/markdown` are decoded as strict
/// UTF-8. Any other mime type is rejected with
/// [`ExtractError::UnsupportedMime`].
pub fn extract_text(
    mime_type: &str,
    data: Vec<u8>,
    file_name: &str,
) -> Result<String, ExtractError> {
    debug!(mime_type, file_name, bytes = data.len(), "Extracting text");
    match mime_type {
        "text/csv" | "text/plain" | "text/markdown" => {
            String::from_utf8(data).map_err(|source| ExtractError::Encoding {
                file_name: file_name.to_string(),
                source,
            })
        }
        other => Err(ExtractError::UnsupportedMime(other.to_string())),
    }
}
