//! Tests for `ClientStore`: the open-iff-authenticated connection
//! invariant, event folding, and notification bookkeeping.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::Utc;
use planhub_client::types::{Notification, User};
use planhub_client::{ClientError, ClientStore, RealtimeConnector, RealtimeHandle, ServerEvent};
use tokio::sync::mpsc::{self, UnboundedSender};
use uuid::Uuid;

/// Connector that counts how many times it was asked to connect and keeps
/// the sender side of each connection so tests can push events.
#[derive(Default)]
struct StubConnector {
    connects: AtomicUsize,
    senders: Mutex<Vec<UnboundedSender<ServerEvent>>>,
}

impl StubConnector {
    fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    fn push_event(&self, event: ServerEvent) {
        let senders = self.senders.lock().expect("lock should not be poisoned");
        for sender in senders.iter() {
            let _ = sender.send(event.clone());
        }
    }
}

#[async_trait]
impl RealtimeConnector for StubConnector {
    async fn connect(&self, _token: &str) -> Result<RealtimeHandle, ClientError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders
            .lock()
            .expect("lock should not be poisoned")
            .push(tx);
        Ok(RealtimeHandle::new(rx, tokio::spawn(async {})))
    }
}

fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "test@example.com".to_string(),
        profile_picture_url: None,
        role: "team_member".to_string(),
        notification_settings: serde_json::json!({}),
        created_at: now,
        updated_at: now,
    }
}

fn test_notification(read: bool) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        notification_type: "task_assignment".to_string(),
        message: "You have been assigned to task: Ship it".to_string(),
        related_project_id: None,
        related_task_id: None,
        read_status: read,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Connection lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fresh_store_is_disconnected() {
    let connector = Arc::new(StubConnector::default());
    let store = ClientStore::new(connector.clone());

    assert!(!store.is_authenticated());
    assert!(!store.is_connected());
    assert_eq!(connector.connect_count(), 0);
}

#[tokio::test]
async fn setting_a_session_connects_exactly_once() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("connect should succeed");
    assert!(store.is_authenticated());
    assert!(store.is_connected());
    assert_eq!(connector.connect_count(), 1);

    // A second set_session with a live connection must not reconnect.
    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("no-op sync should succeed");
    assert_eq!(connector.connect_count(), 1);
}

#[tokio::test]
async fn empty_token_never_connects() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session(String::new(), test_user())
        .await
        .expect("sync should succeed");

    assert!(!store.is_authenticated());
    assert!(!store.is_connected());
    assert_eq!(connector.connect_count(), 0);
}

#[tokio::test]
async fn logout_closes_and_relogin_reconnects() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("connect should succeed");
    store.clear_session().await;
    assert!(!store.is_connected());

    store
        .set_session("another-token".to_string(), test_user())
        .await
        .expect("reconnect should succeed");
    assert!(store.is_connected());
    assert_eq!(connector.connect_count(), 2);
}

#[tokio::test]
async fn clearing_a_session_drops_notifications() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("connect should succeed");
    store.set_notification_list(vec![test_notification(false), test_notification(true)]);
    assert_eq!(store.unread_count(), 1);

    store.clear_session().await;
    assert!(store.notifications().is_empty());
    assert_eq!(store.unread_count(), 0);
}

// ---------------------------------------------------------------------------
// Event folding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notification_events_extend_the_list() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("connect should succeed");

    connector.push_event(ServerEvent::Notification(test_notification(false)));
    let event = store.next_event().await.expect("event should arrive");
    assert_matches!(event, ServerEvent::Notification(_));

    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn task_events_pass_through_without_store_changes() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector.clone());

    store
        .set_session("a-token".to_string(), test_user())
        .await
        .expect("connect should succeed");

    connector.push_event(ServerEvent::TaskUpdate(serde_json::json!({ "name": "T" })));
    let event = store.next_event().await.expect("event should arrive");
    assert_matches!(event, ServerEvent::TaskUpdate(_));
    assert!(store.notifications().is_empty());
}

// ---------------------------------------------------------------------------
// Notification bookkeeping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_notifications_are_prepended() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector);

    let older = test_notification(false);
    let newer = test_notification(false);
    store.set_notification_list(vec![older.clone()]);
    store.add_notification(newer.clone());

    assert_eq!(store.notifications()[0].id, newer.id);
    assert_eq!(store.notifications()[1].id, older.id);
    assert_eq!(store.unread_count(), 2);
}

#[tokio::test]
async fn marking_read_recounts_unread() {
    let connector = Arc::new(StubConnector::default());
    let mut store = ClientStore::new(connector);

    let a = test_notification(false);
    let b = test_notification(false);
    store.set_notification_list(vec![a.clone(), b]);
    assert_eq!(store.unread_count(), 2);

    store.mark_notification_read(a.id);
    assert_eq!(store.unread_count(), 1);

    // Marking an unknown id changes nothing.
    store.mark_notification_read(Uuid::new_v4());
    assert_eq!(store.unread_count(), 1);
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn server_event_decodes_tagged_frames() {
    let task_frame = r#"{"type":"task_update_event","payload":{"name":"Ship it"}}"#;
    let event: ServerEvent = serde_json::from_str(task_frame).expect("frame should decode");
    assert_matches!(event, ServerEvent::TaskUpdate(payload) if payload["name"] == "Ship it");

    let comment_frame = r#"{"type":"comment_event","payload":{"comment_text":"hi"}}"#;
    let event: ServerEvent = serde_json::from_str(comment_frame).expect("frame should decode");
    assert_matches!(event, ServerEvent::Comment(_));
}

#[test]
fn unknown_event_types_fail_to_decode() {
    let frame = r#"{"type":"mystery_event","payload":{}}"#;
    assert!(serde_json::from_str::<ServerEvent>(frame).is_err());
}
