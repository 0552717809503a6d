// src/infrastructure/sqlite_key_value_store.rs
//
// SQLite-backed key-value store
//
// Desktop stand-in for browser local storage: one row per key in `kv_store`.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::key_value_store::KeyValueStore;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;

pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    /// Wrap an existing pool; the schema must already be initialized
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and initialize its schema
    pub fn open(db_path: &Path, pool_size: u32) -> AppResult<Self> {
        let pool = create_connection_pool(db_path, pool_size)?;
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        log::debug!("Opened key-value store at {}", db_path.display());
        Ok(Self::new(Arc::new(pool)))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM kv_store", [])?;
        Ok(())
    }
}
