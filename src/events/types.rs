// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// PRODUCT EVENTS
// ============================================================================

/// Emitted after a new product is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: u64,
    pub name: String,
}

impl ProductCreated {
    pub fn new(product_id: u64, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            name,
        }
    }
}

impl DomainEvent for ProductCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductCreated" }
}

/// Emitted after an existing product is replaced in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: u64,
    pub name: String,
}

impl ProductUpdated {
    pub fn new(product_id: u64, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            name,
        }
    }
}

impl DomainEvent for ProductUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductUpdated" }
}

/// Emitted after a confirmed delete; the id is retired for good
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: u64,
    pub name: String,
}

impl ProductDeleted {
    pub fn new(product_id: u64, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            name,
        }
    }
}

impl DomainEvent for ProductDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductDeleted" }
}

// ============================================================================
// FORM EVENTS
// ============================================================================

/// Emitted when a create or update is refused by validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRejected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    /// Target of the refused update, `None` for a create
    pub product_id: Option<u64>,
    /// Keys of the offending fields
    pub fields: Vec<String>,
}

impl SubmissionRejected {
    pub fn new(product_id: Option<u64>, fields: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            fields,
        }
    }
}

impl DomainEvent for SubmissionRejected {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SubmissionRejected" }
}
