//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Unsupported schema version {found} (latest known is {latest})")]
    UnsupportedSchema { found: i32, latest: i32 },
}
