//! # Shared Text Utilities
//!
//! Data URI parsing, mime-typed text extraction, and CSV chunking shared
//! by the data source plugins.

pub mod data_uri;
pub mod extract;
pub mod splitter;

pub use data_uri::{DataUriError, ParsedDataUri};
pub use extract::{extract_text, ExtractError};
pub use splitter::{approximate_token_count, CsvTextSplitter, SplitError};
