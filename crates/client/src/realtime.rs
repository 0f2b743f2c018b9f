//! Realtime WebSocket connection.
//!
//! The server pushes JSON frames of the shape
//! `{"type": "...", "payload": {...}}`; [`ServerEvent`] decodes them.
//! [`RealtimeConnector`] abstracts the connection so the store can be
//! tested without a live server.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::error::ClientError;
use crate::types::Notification;

/// An event pushed by the server over the realtime connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerEvent {
    /// A task was created or updated. The payload is the task's current
    /// state; consumers refetch the board to pick up deletions.
    #[serde(rename = "task_update_event")]
    TaskUpdate(serde_json::Value),
    /// A comment was appended to a task.
    #[serde(rename = "comment_event")]
    Comment(serde_json::Value),
    /// A notification addressed to this user.
    #[serde(rename = "notification_event")]
    Notification(Notification),
}

/// A live realtime connection: a stream of decoded events plus the
/// background task driving the socket.
pub struct RealtimeHandle {
    events: mpsc::UnboundedReceiver<ServerEvent>,
    task: JoinHandle<()>,
}

impl RealtimeHandle {
    pub fn new(events: mpsc::UnboundedReceiver<ServerEvent>, task: JoinHandle<()>) -> Self {
        Self { events, task }
    }

    /// Receive the next event. Returns `None` once the connection closes.
    pub async fn next_event(&mut self) -> Option<ServerEvent> {
        self.events.recv().await
    }

    /// Receive an already-buffered event without waiting.
    pub fn try_next_event(&mut self) -> Option<ServerEvent> {
        self.events.try_recv().ok()
    }

    /// Tear the connection down.
    pub fn close(self) {
        self.task.abort();
    }
}

/// Strategy for opening realtime connections.
#[async_trait]
pub trait RealtimeConnector: Send + Sync {
    /// Open a connection authenticated by `token`.
    async fn connect(&self, token: &str) -> Result<RealtimeHandle, ClientError>;
}

/// Production connector speaking the server's WebSocket protocol via
/// tokio-tungstenite.
pub struct TungsteniteConnector {
    ws_url: String,
}

impl TungsteniteConnector {
    /// Create a connector for a WebSocket endpoint, e.g.
    /// `ws://localhost:3000/api/ws`.
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self {
            ws_url: ws_url.into(),
        }
    }
}

#[async_trait]
impl RealtimeConnector for TungsteniteConnector {
    async fn connect(&self, token: &str) -> Result<RealtimeHandle, ClientError> {
        let url = format!("{}?token={token}", self.ws_url);
        let (socket, _response) = connect_async(url.as_str()).await?;
        let (mut sink, mut stream) = socket.split();
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            while let Some(result) = stream.next().await {
                let message = match result {
                    Ok(message) => message,
                    Err(err) => {
                        tracing::warn!(error = %err, "Realtime connection error");
                        break;
                    }
                };
                match message {
                    Message::Text(text) => match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Unrecognized realtime frame");
                        }
                    },
                    Message::Ping(payload) => {
                        if sink.send(Message::Pong(payload)).await.is_err() {
                            break;
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        });

        Ok(RealtimeHandle::new(rx, task))
    }
}
