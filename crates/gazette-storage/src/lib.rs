//! Gazette Storage Layer
//!
//! Shared SQLite handle. Opening a database provisions the schema, so
//! anything built on top can assume the `posts` table exists.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;

pub type Result<T> = std::result::Result<T, StorageError>;
