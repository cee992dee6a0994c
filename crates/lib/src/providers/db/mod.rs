pub mod sqlite;

pub use sqlite::SqliteProvider;
