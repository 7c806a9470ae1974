//! Application state container

use gazette_posts::PostStore;
use gazette_storage::Database;

use crate::config::Config;
use crate::Result;

/// Owns the database handle and the stores built on it.
pub struct Gazette {
    config: Config,
    db: Database,
    posts: PostStore,
}

impl Gazette {
    /// Install logging from `config.log_filter`, then open the database.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        crate::init_logging(&config.log_filter);

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        db.set_busy_timeout(config.busy_timeout())?;
        let schema_version = db.schema_version()?;

        tracing::info!(
            path = %config.database_path.display(),
            schema_version,
            "Opened database"
        );

        Ok(Self::with_database(config, db))
    }

    /// In-memory database; `config.database_path` is not touched.
    pub fn in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(Config::default(), db))
    }

    fn with_database(config: Config, db: Database) -> Self {
        let posts = PostStore::new(db.clone());
        Self { config, db, posts }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }
}
