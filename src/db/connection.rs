use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Handle to the process-wide SQLite connection. Cloning shares the same
/// connection; every statement runs under the lock.
#[derive(Clone)]
pub struct Database {
    path: String,
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: impl Into<String>) -> Result<Self, ServerError> {
        let path = path.into();
        let conn = Connection::open(&path)
            .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self, ServerError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
        Ok(Self {
            path: ":memory:".to_string(),
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        let mut conn = self.conn.lock().map_err(|_| {
            log::error!("Database mutex poisoned");
            ServerError::InternalError
        })?;
        f(&mut conn)
    }
}

/// Create the tables if they don't exist yet.
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    log::info!("Database initialized at: {}", db.path());
    Ok(())
}
