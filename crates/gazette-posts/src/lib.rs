//! Gazette Posts
//!
//! CRUD over the `posts` table. Every operation is a single statement
//! against the injected [`gazette_storage::Database`]; nothing is cached
//! between calls.

mod error;
mod post;
mod store;

pub use error::PostError;
pub use post::Post;
pub use store::PostStore;

pub type Result<T> = std::result::Result<T, PostError>;
