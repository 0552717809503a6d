// src/repositories/product_repository.rs
//
// Record Store: the ordered product sequence, mirrored to one storage slot
//
// The in-memory sequence is authoritative for the session. Every mutation
// rewrites the whole slot; a failed write is logged and not retried.
//
// Entries of a stored array that do not decode as a ProductRecord are kept
// verbatim and written back after the records, so they are never lost.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{seed_products, ProductRecord};
use crate::error::AppResult;
use crate::infrastructure::KeyValueStore;

/// Where the hydrated sequence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    Persisted,
    /// Slot absent, unreadable or not a JSON array
    Seeded,
}

struct Loaded {
    records: Vec<ProductRecord>,
    unreadable: Vec<Value>,
    source: HydrationSource,
}

impl Loaded {
    fn seeded() -> Self {
        Self {
            records: seed_products(),
            unreadable: Vec::new(),
            source: HydrationSource::Seeded,
        }
    }
}

pub struct ProductRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    records: Vec<ProductRecord>,
    unreadable: Vec<Value>,
    source: HydrationSource,
}

impl ProductRepository {
    /// Load the sequence from `key`, seeding when nothing usable is stored
    ///
    /// The hydrated sequence is written back once, so a seeded store is
    /// persisted immediately.
    pub fn hydrate(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = Self::load(store.as_ref(), &key);

        let repo = Self {
            store,
            key,
            records: loaded.records,
            unreadable: loaded.unreadable,
            source: loaded.source,
        };
        repo.persist_logged();
        repo
    }

    fn load(store: &dyn KeyValueStore, key: &str) -> Loaded {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("No records under '{}', seeding defaults", key);
                return Loaded::seeded();
            }
            Err(e) => {
                log::warn!("Failed to read '{}': {}; seeding defaults", key, e);
                return Loaded::seeded();
            }
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Records under '{}' are not a JSON array: {}; seeding defaults", key, e);
                return Loaded::seeded();
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut unreadable = Vec::new();
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<ProductRecord>(entry.clone()) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("Keeping unreadable record #{} under '{}' as stored: {}", idx, key, e);
                    unreadable.push(entry);
                }
            }
        }

        log::debug!(
            "Hydrated {} records ({} unreadable) from '{}'",
            records.len(),
            unreadable.len(),
            key
        );
        Loaded {
            records,
            unreadable,
            source: HydrationSource::Persisted,
        }
    }

    /// Re-read the slot, discarding the in-memory sequence
    pub fn reload(&mut self) {
        let loaded = Self::load(self.store.as_ref(), &self.key);
        self.records = loaded.records;
        self.unreadable = loaded.unreadable;
        self.source = loaded.source;
        self.persist_logged();
    }

    pub fn source(&self) -> HydrationSource {
        self.source
    }

    pub fn list_all(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Stored entries that could not be decoded, in stored order
    pub fn unreadable(&self) -> &[Value] {
        &self.unreadable
    }

    pub fn get_by_id(&self, id: u64) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn exists(&self, id: u64) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Highest id currently stored, unreadable entries included
    pub fn max_id(&self) -> Option<u64> {
        let unreadable_ids = self
            .unreadable
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_u64));

        self.records.iter().map(|r| r.id).chain(unreadable_ids).max()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole sequence and persist it
    ///
    /// The in-memory sequence is replaced even when the write fails.
    pub fn replace_all(&mut self, records: Vec<ProductRecord>) {
        self.records = records;
        self.persist_logged();
    }

    /// Serialize the full sequence into the slot
    pub fn persist(&self) -> AppResult<()> {
        let mut entries = Vec::with_capacity(self.records.len() + self.unreadable.len());
        for record in &self.records {
            entries.push(serde_json::to_value(record)?);
        }
        entries.extend(self.unreadable.iter().cloned());

        let json = serde_json::to_string(&entries)?;
        self.store.set(&self.key, &json)
    }

    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            log::error!("Error saving records to '{}': {}", self.key, e);
        }
    }
}
