//! Periodic ping task keeping WebSocket connections alive.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::WsManager;

/// How often to ping every connected client.
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the heartbeat task. Pings all connections every 30 seconds so
/// intermediaries do not drop idle connections. Runs until aborted.
pub fn start_heartbeat(manager: Arc<WsManager>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(HEARTBEAT_INTERVAL);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            manager.ping_all().await;
        }
    })
}
