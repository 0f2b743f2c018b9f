use reqwest::StatusCode;

/// Errors surfaced by the API client and the realtime connection.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level HTTP failure (connection refused, DNS, timeout).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status. `message` carries the
    /// server's `error` field when the body was parseable.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// WebSocket-level failure while connecting or reading.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// A response or frame did not decode as expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
