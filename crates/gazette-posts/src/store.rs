//! Post store

use gazette_storage::Database;

use crate::error::PostError;
use crate::post::Post;
use crate::Result;

/// CRUD access to the `posts` table.
///
/// Holds a clone of the shared [`Database`] handle and adds no locking or
/// retries of its own: each call is one statement, and whatever the
/// database reports is returned as-is.
pub struct PostStore {
    db: Database,
}

impl PostStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All posts, in whatever order the database returns them.
    ///
    /// A row that fails to decode fails the whole call.
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {} FROM posts", Post::COLUMNS))?;
            let mut rows = stmt.query([])?;

            let mut posts = Vec::new();
            while let Some(row) = rows.next()? {
                posts.push(Post::from_row(row).map_err(PostError::Decode)?);
            }

            Ok::<_, PostError>(posts)
        })?;

        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Insert `post` as a new row. `post.id` is ignored.
    pub fn add_post(&self, post: &Post) -> Result<()> {
        let id = self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO posts (title, content, author_id, author_name, created_at, published_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    post.title,
                    post.content,
                    post.author_id,
                    post.author_name,
                    post.created_at,
                    post.published_at,
                ],
            )?;
            Ok::<_, PostError>(conn.last_insert_rowid())
        })?;

        tracing::debug!(post_id = id, author_id = post.author_id, "Added post");
        Ok(())
    }

    /// Replace every field of the row identified by `post.id`.
    pub fn update_post(&self, post: &Post) -> Result<()> {
        let affected = self.db.with_connection(|conn| {
            conn.execute(
                "UPDATE posts
                 SET title = ?1, content = ?2, author_id = ?3, author_name = ?4,
                     created_at = ?5, published_at = ?6
                 WHERE id = ?7",
                rusqlite::params![
                    post.title,
                    post.content,
                    post.author_id,
                    post.author_name,
                    post.created_at,
                    post.published_at,
                    post.id,
                ],
            )
        })?;

        if affected == 0 {
            return Err(PostError::NotFound(post.id));
        }

        tracing::debug!(post_id = post.id, "Updated post");
        Ok(())
    }

    pub fn delete_post(&self, id: i64) -> Result<()> {
        let affected = self
            .db
            .with_connection(|conn| conn.execute("DELETE FROM posts WHERE id = ?1", [id]))?;

        if affected == 0 {
            return Err(PostError::NotFound(id));
        }

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}

impl Clone for PostStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
