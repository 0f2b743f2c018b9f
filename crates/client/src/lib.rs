//! Rust client for the Planhub API.
//!
//! [`ApiClient`] wraps the REST surface; [`ClientStore`] holds session
//! state (token, profile, notifications, navigation) and manages the
//! realtime WebSocket connection, which is open exactly when a non-empty
//! auth token is held.

pub mod api;
pub mod error;
pub mod realtime;
pub mod store;
pub mod types;

pub use api::ApiClient;
pub use error::ClientError;
pub use realtime::{RealtimeConnector, RealtimeHandle, ServerEvent, TungsteniteConnector};
pub use store::ClientStore;
