//! Bridges the in-process event bus onto WebSocket connections.
//!
//! Handlers publish [`PlatformEvent`]s to the [`EventBus`]; the broadcaster
//! task subscribes once and forwards each event to WebSocket clients as a
//! JSON text frame of the shape `{"type": "...", "payload": {...}}`.
//! Events without a recipient fan out to every connection; targeted events
//! go only to the recipient's room.

use std::sync::Arc;

use axum::extract::ws::{Message, Utf8Bytes};
use planhub_events::{EventBus, PlatformEvent};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::ws::WsManager;

/// Serialize an event into the wire frame sent to clients.
fn encode_frame(event: &PlatformEvent) -> Option<Message> {
    let frame = serde_json::json!({
        "type": event.event_type,
        "payload": event.payload,
    });
    match serde_json::to_string(&frame) {
        Ok(text) => Some(Message::Text(Utf8Bytes::from(text))),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize event frame");
            None
        }
    }
}

/// Spawn the broadcaster task. Runs until the bus closes or the task is
/// aborted at shutdown.
pub fn start_broadcaster(bus: Arc<EventBus>, manager: Arc<WsManager>) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let Some(message) = encode_frame(&event) else {
                        continue;
                    };
                    match event.recipient_user_id {
                        Some(user_id) => {
                            let delivered = manager.send_to_user(user_id, message).await;
                            tracing::debug!(
                                event_type = %event.event_type,
                                %user_id,
                                delivered,
                                "Delivered targeted event"
                            );
                        }
                        None => {
                            manager.broadcast(message).await;
                            tracing::debug!(
                                event_type = %event.event_type,
                                "Broadcast event to all connections"
                            );
                        }
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event broadcaster lagged; events dropped");
                }
                Err(RecvError::Closed) => {
                    tracing::info!("Event bus closed; broadcaster stopping");
                    break;
                }
            }
        }
    })
}
