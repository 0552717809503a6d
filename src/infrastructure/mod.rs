// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod clock;
pub mod key_value_store;
pub mod sqlite_key_value_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore};
pub use sqlite_key_value_store::SqliteKeyValueStore;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
