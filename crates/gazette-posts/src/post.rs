//! Post entity

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A single publication, one row of `posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by the database on insert; ignored by `add_post`.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    /// Unix timestamp
    pub created_at: i64,
    /// Unix timestamp; what zero means is up to the caller
    #[serde(default)]
    pub published_at: i64,
}

impl Post {
    /// Column list in decode order.
    pub(crate) const COLUMNS: &'static str =
        "id, title, content, author_id, author_name, created_at, published_at";

    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
        author_name: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            author_id,
            author_name: author_name.into(),
            created_at,
            published_at: 0,
        }
    }

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            author_id: row.get(3)?,
            author_name: row.get(4)?,
            created_at: row.get(5)?,
            published_at: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_from_row_is_positional() {
        let conn = Connection::open_in_memory().unwrap();
        let post = conn
            .query_row(
                "SELECT 3, 'Title', 'Body', 42, 'Ann', 100, 200",
                [],
                Post::from_row,
            )
            .unwrap();

        assert_eq!(
            post,
            Post {
                id: 3,
                title: "Title".to_string(),
                content: "Body".to_string(),
                author_id: 42,
                author_name: "Ann".to_string(),
                created_at: 100,
                published_at: 200,
            }
        );
    }

    #[test]
    fn test_from_row_rejects_wrong_type() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row(
            "SELECT 3, 'Title', 'Body', 'not a number', 'Ann', 100, 200",
            [],
            Post::from_row,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_without_id_defaults_to_zero() {
        let json = r#"{
            "title": "Hello",
            "content": "World",
            "author_id": 1,
            "author_name": "Ann",
            "created_at": 1700000000
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, Post::new("Hello", "World", 1, "Ann", 1_700_000_000));
    }
}
