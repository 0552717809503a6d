// src/application/state.rs
//
// Wiring of the catalog: storage, bus, notification emitter, controller.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::infrastructure::{Clock, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, SystemClock};
use crate::repositories::{IdAllocator, ProductRepository};
use crate::services::{CatalogService, NotificationService};

/// Everything the rendering layer talks to
pub struct AppState {
    pub config: CatalogConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog: CatalogService,
    pub notifications: NotificationService,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Hydrate the catalog from `store` and wire its collaborators
    pub fn new(store: Arc<dyn KeyValueStore>, config: CatalogConfig, clock: Arc<dyn Clock>) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let notifications = NotificationService::new(
            event_bus.clone(),
            clock.clone(),
            config.notification_display_window(),
        );
        notifications.register_event_handlers();

        let repo = ProductRepository::hydrate(store.clone(), config.records_key.clone());
        let allocator = IdAllocator::new(store, config.next_id_key.clone());
        let catalog = CatalogService::new(repo, allocator, event_bus.clone(), clock.clone());

        log::info!(
            "Catalog ready with {} products",
            catalog.list_products().len()
        );

        Self {
            config,
            event_bus,
            catalog,
            notifications,
            clock,
        }
    }

    /// Catalog persisted in the configured SQLite file
    pub fn open(config: CatalogConfig) -> AppResult<Self> {
        let db_path = config.resolve_database_path()?;
        let store = SqliteKeyValueStore::open(&db_path, config.pool_size)?;
        Ok(Self::new(Arc::new(store), config, Arc::new(SystemClock)))
    }

    /// Catalog that forgets everything when dropped
    pub fn in_memory(config: CatalogConfig) -> Self {
        Self::new(
            Arc::new(InMemoryKeyValueStore::new()),
            config,
            Arc::new(SystemClock),
        )
    }
}
