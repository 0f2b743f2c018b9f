//! WebSocket upgrade handler.
//!
//! Clients connect with their JWT in the `token` query parameter:
//! `GET /api/ws?token=<jwt>`. Connections with a missing or invalid token are
//! rejected before the upgrade completes; authenticated connections join
//! the user's room in the [`WsManager`](super::WsManager) registry.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    token: Option<String>,
}

/// `GET /api/ws?token=<jwt>` -- authenticate, then upgrade to a WebSocket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Authentication error".into())))?;

    let claims = validate_token(&token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Authentication error".into())))?;

    let user_id = claims.sub;
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user_id)))
}

/// Drive a single authenticated WebSocket connection until it closes.
async fn handle_socket(socket: WebSocket, state: AppState, user_id: Id) {
    let conn_id = Uuid::new_v4().to_string();
    let mut rx = state.ws_manager.add(conn_id.clone(), user_id).await;

    tracing::info!(%user_id, conn_id = %conn_id, "WebSocket connected");

    let (mut sink, mut stream) = socket.split();

    // Forward messages queued by the manager (events, pings, close frames)
    // out to the client. Ends when the channel is dropped or a Close frame
    // has been written.
    let mut send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let closing = matches!(message, Message::Close(_));
            if sink.send(message).await.is_err() {
                break;
            }
            if closing {
                break;
            }
        }
    });

    // Drain inbound frames. The platform pushes all data server-to-client;
    // inbound traffic is only pongs and the eventual close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Close(_) => break,
                Message::Ping(_) | Message::Pong(_) => {}
                _ => {
                    tracing::debug!("Ignoring inbound WebSocket message");
                }
            }
        }
    });

    // Either side finishing tears down the connection.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.ws_manager.remove(&conn_id).await;
    tracing::info!(%user_id, conn_id = %conn_id, "WebSocket disconnected");
}
