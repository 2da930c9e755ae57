//! Database connection and table management.

use crate::error::{DbError, Result};
use crate::migrations;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Main database handle. SQLite connections are not `Sync`, so the single
/// connection is serialized behind a mutex; isolation is left to SQLite.
pub struct Database {
    conn: Mutex<Connection>,
    path: String,
}

impl Database {
    /// Open or create a database file at the specified path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        info!(path = %path_str, "Opened analysis database");

        Ok(Self {
            conn: Mutex::new(conn),
            path: path_str,
        })
    }

    /// Private in-memory database, gone when the handle drops.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(Connection::open_in_memory()?),
            path: ":memory:".to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Apply all pending migrations.
    pub fn initialize(&self) -> Result<()> {
        migrations::run_migrations(self)
    }

    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&conn)
    }

    pub fn with_conn_mut<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&mut conn)
    }
}
