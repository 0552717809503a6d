// src/config.rs
//
// Catalog configuration
//
// Storage slot names are part of the persisted format: changing them
// orphans existing data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::db::get_database_path;
use crate::error::AppResult;

pub const DEFAULT_RECORDS_KEY: &str = "pos_categories_v1";
pub const DEFAULT_NEXT_ID_KEY: &str = "pos_next_id_v1";
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Slot holding the JSON array of records
    pub records_key: String,

    /// Slot holding the next id as a decimal string
    pub next_id_key: String,

    /// How long a notification stays visible
    pub notification_display_ms: u64,

    /// SQLite file; `None` uses the application data directory
    pub database_path: Option<PathBuf>,

    pub pool_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            records_key: DEFAULT_RECORDS_KEY.to_string(),
            next_id_key: DEFAULT_NEXT_ID_KEY.to_string(),
            notification_display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            database_path: None,
            pool_size: 4,
        }
    }
}

impl CatalogConfig {
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Configured database file, or the default location
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }

    pub fn notification_display_window(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.notification_display_ms as i64)
    }
}
