//! Database connection handle

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::migrations::{get_schema_version, run_migrations};
use crate::Result;

/// Shared handle to a single SQLite connection.
///
/// Clones share the same connection; every access goes through the mutex,
/// so a `Database` can be handed to as many threads as needed.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the locked connection.
    ///
    /// The closure picks its own error type, so callers can keep their
    /// error enums instead of funnelling everything through `StorageError`.
    pub fn with_connection<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Connection) -> std::result::Result<T, E>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// How long a statement waits on a locked database before failing.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn.lock().busy_timeout(timeout)?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        self.with_connection(get_schema_version)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
