//! # CSV Text Splitting
//!
//! Splits CSV content into chunks sized by an approximate token budget.
//! Each record is rendered as `header: value` lines, and consecutive
//! records are packed into a chunk while the running token estimate stays
//! within the budget. Records are atomic: a single record over budget
//! still becomes its own chunk rather than being cut mid-row.

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to parse CSV content: {0}")]
    Csv(#[from] csv::Error),
}

/// Estimates the token count of a text without a tokenizer model.
///
/// Each whitespace-separated word counts as one token plus one more per
/// four characters beyond the first four. The estimate is deterministic,
/// which is all the chunk packer needs.
pub fn approximate_token_count(text: &str) -> usize {
    text.split_whitespace()
        .map(|word| 1 + word.chars().count() / 4)
        .sum()
}

/// A splitter that chunks CSV text by rows under a token budget.
#[derive(Debug, Clone, Copy)]
pub struct CsvTextSplitter {
    /// The approximate token budget for a single chunk.
    pub chunk_size: usize,
}

impl CsvTextSplitter {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Splits CSV `text` into chunks.
    ///
    /// Returns an empty vector for empty or header-only input. Malformed
    /// rows surface as [`SplitError::Csv`].
    pub fn split(&self, text: &str) -> Result<Vec<String>, SplitError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_tokens = 0;

        for record in reader.records() {
            let record = record?;
            let row = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| format!("{header}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");
            let row_tokens = approximate_token_count(&row);

            if row_tokens > self.chunk_size {
                warn!(
                    row_tokens,
                    budget = self.chunk_size,
                    "CSV row exceeds the chunk budget on its own"
                );
            }

            if !current.is_empty() && current_tokens + row_tokens > self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                current_tokens = 0;
            }

            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(&row);
            current_tokens += row_tokens;
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        Ok(chunks)
    }
}
