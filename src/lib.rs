// src/lib.rs
// POS Catalog - Local-first product catalog manager
//
// Architecture:
// - Domain-centric: field rules and record shape live in the domain
// - Event-driven: the controller emits outcomes, the notifier reacts
// - Explicit: every write validates first, every storage failure is logged
// - Local-first: records live in a key-value slot on the user's machine
// - Application Layer: UI boundary (DTOs, commands, error responses)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    normalize_product,
    seed_products,
    validate_product,
    Category,
    DomainError,
    // Validation results
    Field,
    ProductInput,
    ProductRecord,
    ValidationErrors,
    DESCRIPTION_MAX_LEN,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{CatalogConfig, DEFAULT_NEXT_ID_KEY, DEFAULT_RECORDS_KEY};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent,
    EventBus,
    EventLogEntry,
    ProductCreated,
    ProductDeleted,
    ProductUpdated,
    SubmissionRejected,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use infrastructure::{
    Clock, FixedClock, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, SystemClock,
};

pub use repositories::{HydrationSource, IdAllocator, ProductRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CatalogService,
    DeleteOutcome,
    EditMode,
    FormState,
    // Notification Emitter
    Notification,
    NotificationService,
    NotificationVariant,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType, FormViewDto, ProductRowDto};
