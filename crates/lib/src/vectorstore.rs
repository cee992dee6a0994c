//! # Vector Store Document Model
//!
//! The document record emitted by data source plugins, plus the class
//! schema template a vector store needs to host those documents. The
//! pipeline here stops at the document record; embedding and similarity
//! search live elsewhere.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// A single chunk of ingested content, ready for a vector store.
///
/// Documents are immutable once created: construct them fully formed via
/// [`Document::new`] and never mutate them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The property name under which `content` is stored in the class.
    pub content_key: String,
    /// The chunk text.
    pub content: String,
    /// Descriptive metadata. File-backed sources always set `source` to
    /// the originating file name.
    pub metadata: HashMap<String, String>,
}

impl Document {
    pub fn new(
        content_key: impl Into<String>,
        content: impl Into<String>,
        metadata: HashMap<String, String>,
    ) -> Self {
        Self {
            content_key: content_key.into(),
            content: content.into(),
            metadata,
        }
    }

    /// The `source` metadata entry, if present.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get("source").map(String::as_str)
    }
}

/// Renders the vector store class definition for a data source.
///
/// The template is fixed apart from the class name and the content key:
/// one text property for the content, plus `source` and `metadata`
/// properties every handler shares.
pub fn class_schema(class_name: &str, content_key: &str) -> Value {
    json!({
        "classes": [{
            "class": class_name,
            "description": "Text data source",
            "properties": [
                {
                    "name": content_key,
                    "dataType": ["text"],
                    "description": "Text",
                },
                {
                    "name": "source",
                    "dataType": ["string"],
                    "description": "Document source",
                },
                {
                    "name": "metadata",
                    "dataType": ["string[]"],
                    "description": "Document metadata",
                },
            ],
        }]
    })
}
