//! # Document Persistence
//!
//! Writes the documents produced by a data source run into the
//! `documents` table inside a single transaction.

use crate::datasource::traits::DataSourceError;
use crate::vectorstore::Document;
use turso::{params, Connection};
use uuid::Uuid;

/// Takes the documents from one ingestion run and stores them.
///
/// Each document gets a stable v5 UUID derived from
/// `<source>#chunk_<index>`, so re-ingesting the same source overwrites
/// the same rows instead of accumulating duplicates. The title is the
/// first 80 characters of the content.
pub async fn store_documents(
    conn: &mut Connection,
    documents: &[Document],
    source: &str,
    owner_id: Option<&str>,
) -> Result<Vec<String>, DataSourceError> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }

    let tx = conn.transaction().await?;
    let mut stored_ids = Vec::new();

    for (i, doc) in documents.iter().enumerate() {
        let source_url = format!("{source}#chunk_{i}");
        let document_id =
            Uuid::new_v5(&Uuid::NAMESPACE_URL, source_url.as_bytes()).to_string();
        let title: String = doc.content.chars().take(80).collect();

        tx.execute(
            "INSERT OR REPLACE INTO documents (id, owner_id, source_url, title, content, content_key)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                document_id.clone(),
                owner_id,
                source_url,
                title,
                doc.content.clone(),
                doc.content_key.clone()
            ],
        )
        .await?;
        stored_ids.push(document_id);
    }

    tx.commit().await?;

    Ok(stored_ids)
}
