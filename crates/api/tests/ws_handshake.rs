//! Handshake tests for the WebSocket endpoint at `/api/ws`.
//!
//! These run the app on a real socket and perform actual client
//! handshakes, asserting on the HTTP outcome and the connection registry.

mod common;

use std::sync::Arc;
use std::time::Duration;

use planhub_api::ws::WsManager;
use sqlx::PgPool;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Error as WsError;

/// Serve the app on an ephemeral port, returning the WebSocket endpoint
/// URL and a handle on the connection registry.
async fn spawn_server(pool: PgPool) -> (String, Arc<WsManager>) {
    let (app, manager) = common::build_test_app_with_manager(pool);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    (format!("ws://{addr}/api/ws"), manager)
}

/// Wait briefly for the registry to reach the expected size.
async fn await_connection_count(manager: &WsManager, expected: usize) {
    for _ in 0..100 {
        if manager.connection_count().await == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("registry never reached {expected} connections");
}

// ---------------------------------------------------------------------------
// Test: an invalid token is rejected before joining any room
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_token_is_rejected_before_joining(pool: PgPool) {
    let (url, manager) = spawn_server(pool).await;

    let err = connect_async(format!("{url}?token=not.a.jwt").as_str())
        .await
        .expect_err("handshake must fail");
    match err {
        WsError::Http(response) => assert_eq!(response.status().as_u16(), 401),
        other => panic!("expected an HTTP rejection, got {other:?}"),
    }

    assert_eq!(
        manager.connection_count().await,
        0,
        "a rejected handshake must not join any room"
    );
}

// ---------------------------------------------------------------------------
// Test: a missing or empty token is rejected before joining
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_is_rejected_before_joining(pool: PgPool) {
    let (url, manager) = spawn_server(pool).await;

    for uri in [url.clone(), format!("{url}?token=")] {
        let err = connect_async(uri.as_str())
            .await
            .expect_err("handshake must fail");
        match err {
            WsError::Http(response) => assert_eq!(response.status().as_u16(), 401, "{uri}"),
            other => panic!("expected an HTTP rejection, got {other:?}"),
        }
    }

    assert_eq!(manager.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: a valid token completes the handshake and joins the user's room
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_token_joins_user_room(pool: PgPool) {
    let (user, token) = common::create_user_with_token(&pool, "ws@example.com").await;
    let (url, manager) = spawn_server(pool).await;

    let (_socket, response) = connect_async(format!("{url}?token={token}").as_str())
        .await
        .expect("handshake should succeed");
    assert_eq!(response.status().as_u16(), 101);

    await_connection_count(&manager, 1).await;
    assert_eq!(manager.user_connection_count(user.id).await, 1);
}
