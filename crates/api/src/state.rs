use std::sync::Arc;

use planhub_events::EventBus;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: planhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Realtime connection registry.
    pub ws_manager: Arc<WsManager>,
    /// Event bus feeding the realtime broadcaster.
    pub event_bus: Arc<EventBus>,
}
