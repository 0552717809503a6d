// src/repositories/id_allocator.rs
//
// Identifier Allocator
//
// Hands out product ids from a persisted counter. The caller passes the
// highest id it currently holds, so a missing, corrupt or stale counter can
// never produce an id that is already taken.

use std::sync::Arc;

use crate::infrastructure::KeyValueStore;

pub struct IdAllocator {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl IdAllocator {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Allocate the next id and persist the counter after it
    ///
    /// The result is at least `max_existing_id + 1` (1 when nothing exists)
    /// and at least the stored counter.
    pub fn next_id(&self, max_existing_id: Option<u64>) -> u64 {
        let floor = max_existing_id.unwrap_or(0).saturating_add(1);

        let id = match self.read_counter() {
            Some(counter) => counter.max(floor),
            None => {
                log::warn!(
                    "Id counter '{}' missing or corrupt, recovering from max id {:?}",
                    self.key,
                    max_existing_id
                );
                floor
            }
        };

        let next = id.saturating_add(1);
        if let Err(e) = self.store.set(&self.key, &next.to_string()) {
            log::error!("Error saving id counter '{}': {}", self.key, e);
        }

        id
    }

    /// Current counter, `None` when absent or unparseable
    fn read_counter(&self) -> Option<u64> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.trim().parse::<u64>().ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read id counter '{}': {}", self.key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::{InMemoryKeyValueStore, MockKeyValueStore};

    const KEY: &str = "pos_next_id_v1";

    fn allocator_with(entries: &[(&str, &str)]) -> (IdAllocator, Arc<InMemoryKeyValueStore>) {
        let store = Arc::new(InMemoryKeyValueStore::with_entries(entries.iter().copied()));
        (IdAllocator::new(store.clone(), KEY), store)
    }

    #[test]
    fn test_uses_valid_counter() {
        let (allocator, store) = allocator_with(&[(KEY, "7")]);
        assert_eq!(allocator.next_id(Some(2)), 7);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn test_missing_counter_recovers_from_max_id() {
        let (allocator, store) = allocator_with(&[]);
        assert_eq!(allocator.next_id(Some(2)), 3);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_no_records_starts_at_one() {
        let (allocator, store) = allocator_with(&[]);
        assert_eq!(allocator.next_id(None), 1);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_counter_recovers() {
        let (allocator, _) = allocator_with(&[(KEY, "abc")]);
        assert_eq!(allocator.next_id(Some(5)), 6);
    }

    #[test]
    fn test_stale_counter_never_reuses_ids() {
        let (allocator, _) = allocator_with(&[(KEY, "3")]);
        assert_eq!(allocator.next_id(Some(10)), 11);
    }

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let (allocator, _) = allocator_with(&[]);
        let mut max_seen = Some(2);
        let mut previous = 0;

        for _ in 0..50 {
            let id = allocator.next_id(max_seen);
            assert!(id > previous);
            assert!(id > max_seen.unwrap_or(0));
            previous = id;
            max_seen = Some(id);
        }
    }

    #[test]
    fn test_counter_advances_without_new_records() {
        // ids of deleted records are never handed out again
        let (allocator, _) = allocator_with(&[]);
        let first = allocator.next_id(Some(2));
        let second = allocator.next_id(Some(2));
        assert_eq!((first, second), (3, 4));
    }

    #[test]
    fn test_write_failure_still_returns_id() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(Some("4".to_string())));
        mock.expect_set()
            .returning(|_, _| Err(AppError::Storage("quota exceeded".to_string())));

        let allocator = IdAllocator::new(Arc::new(mock), KEY);
        assert_eq!(allocator.next_id(Some(2)), 4);
    }
}
