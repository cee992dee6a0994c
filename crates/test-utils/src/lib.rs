use anyhow::Result;
use turso::Database;

// --- Test Setup ---

/// An isolated in-memory database for one test.
pub struct TestSetup {
    pub db: Database,
}

impl TestSetup {
    /// Builds the database and applies the application schema, using
    /// the same statements the server runs at startup.
    pub async fn new() -> Result<Self> {
        let db = turso::Builder::new_local(":memory:").build().await?;
        let conn = db.connect()?;
        for statement in ragstack::providers::db::sqlite::sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }

        Ok(Self { db })
    }
}

// --- Fixtures ---

pub mod helpers {
    use base64::{engine::general_purpose, Engine as _};
    use serde_json::{json, Value};

    /// A small CSV fixture with a header and three records.
    pub const SAMPLE_CSV: &str = "name,role,city\n\
        Alice,engineer,Paris\n\
        Bob,operator,Berlin\n\
        Carol,analyst,Rome\n";

    /// Wraps CSV text into the upload convention the file sources expect.
    pub fn csv_data_uri(file_name: &str, csv: &str) -> String {
        ragstack::text::data_uri::build("text/csv", file_name, csv.as_bytes())
    }

    /// Builds a data URI without the optional `name=` parameter.
    pub fn unnamed_data_uri(mime_type: &str, bytes: &[u8]) -> String {
        let encoded = general_purpose::STANDARD.encode(bytes);
        format!("data:{mime_type};base64,{encoded}")
    }

    /// The input map a file data source receives for an upload.
    pub fn file_input(uri: &str) -> Value {
        json!({ "file": uri })
    }
}
