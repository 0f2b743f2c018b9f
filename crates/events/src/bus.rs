//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub between the REST handlers and
//! the realtime broadcaster. It is designed to be shared via `Arc<EventBus>`
//! across the application.

use chrono::{DateTime, Utc};
use planhub_core::types::Id;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Wire name for task create/update events.
pub const EVENT_TASK_UPDATE: &str = "task_update_event";

/// Wire name for comment creation events.
pub const EVENT_COMMENT: &str = "comment_event";

/// Wire name for per-user notification delivery.
pub const EVENT_NOTIFICATION: &str = "notification_event";

// ---------------------------------------------------------------------------
// PlatformEvent
// ---------------------------------------------------------------------------

/// A mutation event to be pushed to connected clients.
///
/// Events without a `recipient_user_id` fan out to every connection;
/// events with one are delivered only to that user's room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Wire event name, e.g. [`EVENT_TASK_UPDATE`].
    pub event_type: String,

    /// Target user for room-scoped delivery, or `None` for a global
    /// broadcast.
    pub recipient_user_id: Option<Id>,

    /// The full entity record the event carries.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl PlatformEvent {
    /// Create an event addressed to every connected client.
    pub fn broadcast(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            recipient_user_id: None,
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Create an event addressed to a single user's room.
    pub fn to_user(
        user_id: Id,
        event_type: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            recipient_user_id: Some(user_id),
            payload,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`PlatformEvent`]. Delivery is
/// at-most-once: subscribers that lag past the buffer or are absent at
/// publish time simply miss the event.
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// clients resynchronize through their next REST fetch.
    pub fn publish(&self, event: PlatformEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
