//! Post error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("post not found: {0}")]
    NotFound(i64),

    /// A row could not be mapped into a [`crate::Post`].
    #[error("Failed to decode post row: {0}")]
    Decode(#[source] rusqlite::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl PostError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostError::NotFound(_))
    }
}
