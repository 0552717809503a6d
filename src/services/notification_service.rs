// src/services/notification_service.rs
//
// Notification Emitter
//
// Turns catalog outcomes into transient toasts. Only the newest toast is
// visible; it hides itself once the display window has elapsed.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{EventBus, ProductCreated, ProductDeleted, ProductUpdated, SubmissionRejected};
use crate::infrastructure::Clock;

pub const MSG_CHECK_INPUT: &str = "Please check your input.";
pub const MSG_PRODUCT_ADDED: &str = "Product added successfully.";
pub const MSG_PRODUCT_UPDATED: &str = "Product updated successfully.";
pub const MSG_PRODUCT_DELETED: &str = "Product deleted successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub variant: NotificationVariant,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct NotificationState {
    current: Option<Notification>,
    history: Vec<Notification>,
}

/// Toast state shared between the service and its bus handlers
///
/// Holds no reference to the bus, so subscribed handlers never keep the
/// bus alive.
#[derive(Clone)]
struct Notifier {
    clock: Arc<dyn Clock>,
    display_window: Duration,
    state: Arc<RwLock<NotificationState>>,
}

impl Notifier {
    fn notify(&self, message: String, variant: NotificationVariant) -> Notification {
        let shown_at = self.clock.now();
        let notification = Notification {
            message,
            variant,
            shown_at,
            expires_at: shown_at + self.display_window,
        };

        log::debug!("Notify [{:?}] {}", variant, notification.message);

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = Some(notification.clone());
        state.history.push(notification.clone());
        notification
    }
}

/// Shared handle: clones see the same toast
#[derive(Clone)]
pub struct NotificationService {
    event_bus: Arc<EventBus>,
    notifier: Notifier,
}

impl NotificationService {
    pub fn new(event_bus: Arc<EventBus>, clock: Arc<dyn Clock>, display_window: Duration) -> Self {
        Self {
            event_bus,
            notifier: Notifier {
                clock,
                display_window,
                state: Arc::new(RwLock::new(NotificationState::default())),
            },
        }
    }

    /// Show a toast, replacing any visible one
    pub fn notify(&self, message: impl Into<String>, variant: NotificationVariant) -> Notification {
        self.notifier.notify(message.into(), variant)
    }

    /// The visible toast, if its window has not elapsed
    pub fn current(&self) -> Option<Notification> {
        let now = self.notifier.clock.now();
        let state = self.notifier.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .current
            .as_ref()
            .filter(|n| n.is_visible_at(now))
            .cloned()
    }

    /// Hide the visible toast early
    pub fn dismiss(&self) {
        self.notifier
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .current = None;
    }

    /// Every toast shown this session, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.notifier
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }

    /// Subscribe to catalog outcomes on the bus
    pub fn register_event_handlers(&self) {
        {
            let notifier = self.notifier.clone();
            self.event_bus.subscribe::<ProductCreated, _>(move |_| {
                notifier.notify(MSG_PRODUCT_ADDED.to_string(), NotificationVariant::Success);
            });
        }
        {
            let notifier = self.notifier.clone();
            self.event_bus.subscribe::<ProductUpdated, _>(move |_| {
                notifier.notify(MSG_PRODUCT_UPDATED.to_string(), NotificationVariant::Success);
            });
        }
        {
            let notifier = self.notifier.clone();
            self.event_bus.subscribe::<ProductDeleted, _>(move |_| {
                notifier.notify(MSG_PRODUCT_DELETED.to_string(), NotificationVariant::Success);
            });
        }
        {
            let notifier = self.notifier.clone();
            self.event_bus.subscribe::<SubmissionRejected, _>(move |_| {
                notifier.notify(MSG_CHECK_INPUT.to_string(), NotificationVariant::Danger);
            });
        }
    }
}
