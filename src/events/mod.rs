// src/events/mod.rs
//
// Internal Event System - Public API
//
// The catalog controller emits facts; the notification service reacts.
// EventHandler is internal to the bus and must NOT be exported.

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{ProductCreated, ProductDeleted, ProductUpdated, SubmissionRejected};

pub use bus::{EventBus, EventLogEntry};
