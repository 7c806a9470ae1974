//! Gazette Core
//!
//! Wires configuration, logging and the post store together.

mod config;
mod error;
mod gazette;

pub use config::Config;
pub use error::CoreError;
pub use gazette::Gazette;

pub use gazette_posts::{Post, PostError, PostStore};
pub use gazette_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter`. Safe to call more than once.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
