// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod notification_service;

#[cfg(test)]
mod catalog_service_tests;

pub use catalog_service::{CatalogService, DeleteOutcome, EditMode, FormState};

pub use notification_service::{Notification, NotificationService, NotificationVariant};
