use crate::errors::StorageError;
use std::fmt::{self, Debug};
use turso::Database;

pub mod sql;

/// Local SQLite storage backed by Turso.
///
/// The wrapped `Database` manages its own connection pool and is cheap
/// to clone; clones share the same underlying file or in-memory
/// instance.
#[derive(Clone)]
pub struct SqliteProvider {
    /// The underlying database handle.
    pub db: Database,
}

impl SqliteProvider {
    /// Opens the database at `db_path`, or an isolated in-memory one
    /// for `":memory:"`.
    ///
    /// Every call to this constructor with `":memory:"` gets its own
    /// database. To share an in-memory instance across providers, as
    /// tests do, create one provider and clone it.
    pub async fn new(db_path: &str) -> Result<Self, StorageError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        // Enable WAL mode for better concurrency. It has no effect on
        // in-memory databases but is safe to run.
        let conn = db
            .connect()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        // Use `query` for PRAGMA statements that return a value to avoid
        // "unexpected row" errors.
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { db })
    }

    /// Ensures that all required application tables exist.
    ///
    /// This function is idempotent and safe to call on every startup.
    pub async fn initialize_schema(&self) -> Result<(), StorageError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| StorageError::OperationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// A helper for tests to pre-populate data by executing multiple SQL
    /// statements.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), StorageError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ())
                .await
                .map_err(|e| StorageError::OperationFailed(e.to_string()))?;
        }
        Ok(())
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

impl AsRef<Database> for SqliteProvider {
    fn as_ref(&self) -> &Database {
        &self.db
    }
}
