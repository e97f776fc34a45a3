use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::info;

use crate::errors::AppError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Owns the single SQLite connection for one run.
///
/// Dropping the value closes the connection, so every exit path releases it.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| AppError::Persistence(format!("Open DB {} failed: {e}", path.display())))?;
        info!(path = %path.display(), "Opened database");
        Ok(Self { conn })
    }

    /// Opens an existing database without write access, for analysis passes.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| AppError::Persistence(format!("Open DB {} failed: {e}", path.display())))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::Persistence(format!("Open in-memory DB failed: {e}")))?;
        Ok(Self { conn })
    }

    /// Creates the listings table if it is missing. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> Result<(), AppError> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .map_err(|e| AppError::Persistence(format!("Failed to apply schema: {e}")))
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&mut self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Connection) -> Result<T, AppError>,
    {
        f(&mut self.conn)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn close(self) -> Result<(), AppError> {
        self.conn
            .close()
            .map_err(|(_, e)| AppError::Persistence(format!("Close DB failed: {e}")))
    }
}
