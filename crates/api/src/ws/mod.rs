//! WebSocket infrastructure for real-time updates.
//!
//! Provides the authenticated upgrade handler, the per-user connection
//! registry, and heartbeat monitoring.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
