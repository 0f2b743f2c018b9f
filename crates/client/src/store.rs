//! Client-side session and UI state.
//!
//! [`ClientStore`] centralizes what a frontend shell needs: the auth
//! token and profile, the notification list with its unread count, the
//! global search query, breadcrumbs, and the active navigation section.
//! It also owns the realtime connection, holding the invariant that the
//! socket is open exactly when a non-empty token is held -- repeated
//! logins with the same session never open a second connection.

use std::sync::Arc;

use crate::error::ClientError;
use crate::realtime::{RealtimeConnector, RealtimeHandle, ServerEvent};
use crate::types::{Breadcrumb, Notification, User};

pub struct ClientStore {
    connector: Arc<dyn RealtimeConnector>,
    auth_token: String,
    user: Option<User>,
    notifications: Vec<Notification>,
    unread_count: usize,
    search_query: String,
    breadcrumbs: Vec<Breadcrumb>,
    active_nav: String,
    connection: Option<RealtimeHandle>,
}

impl ClientStore {
    pub fn new(connector: Arc<dyn RealtimeConnector>) -> Self {
        Self {
            connector,
            auth_token: String::new(),
            user: None,
            notifications: Vec::new(),
            unread_count: 0,
            search_query: String::new(),
            breadcrumbs: Vec::new(),
            active_nav: String::new(),
            connection: None,
        }
    }

    // --- Session ---

    /// Store a session and bring the realtime connection in line with it.
    /// An empty token is treated as a logout.
    pub async fn set_session(&mut self, token: String, user: User) -> Result<(), ClientError> {
        self.auth_token = token;
        self.user = Some(user);
        self.sync_connection().await
    }

    /// Drop the session, its notifications, and the realtime connection.
    pub async fn clear_session(&mut self) {
        self.auth_token.clear();
        self.user = None;
        self.notifications.clear();
        self.unread_count = 0;
        // sync_connection cannot fail on the close path
        let _ = self.sync_connection().await;
    }

    pub fn is_authenticated(&self) -> bool {
        !self.auth_token.is_empty()
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Open or close the connection so it matches the token state.
    /// Idempotent: an already-correct state is left untouched.
    async fn sync_connection(&mut self) -> Result<(), ClientError> {
        if self.auth_token.is_empty() {
            if let Some(handle) = self.connection.take() {
                handle.close();
            }
            return Ok(());
        }
        if self.connection.is_none() {
            let handle = self.connector.connect(&self.auth_token).await?;
            self.connection = Some(handle);
        }
        Ok(())
    }

    // --- Realtime events ---

    /// Wait for the next server event, fold it into the store, and return
    /// it for the caller's own handling (e.g. refetching a task board).
    /// Returns `None` when no connection is open or it has closed.
    pub async fn next_event(&mut self) -> Option<ServerEvent> {
        let event = self.connection.as_mut()?.next_event().await?;
        self.apply_event(&event);
        Some(event)
    }

    /// Fold a server event into the store. Task and comment events carry
    /// no store state; notification events extend the list.
    pub fn apply_event(&mut self, event: &ServerEvent) {
        if let ServerEvent::Notification(notification) = event {
            self.add_notification(notification.clone());
        }
    }

    // --- Notifications ---

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Replace the notification list, e.g. after a REST fetch.
    pub fn set_notification_list(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
        self.recount_unread();
    }

    /// Prepend a newly arrived notification (newest first).
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        self.recount_unread();
    }

    /// Flip a notification to read locally, mirroring a successful
    /// `PUT /api/notifications/{id}`.
    pub fn mark_notification_read(&mut self, id: planhub_core::types::Id) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read_status = true;
        }
        self.recount_unread();
    }

    fn recount_unread(&mut self) {
        self.unread_count = self.notifications.iter().filter(|n| !n.read_status).count();
    }

    // --- Navigation and search ---

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn set_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>) {
        self.breadcrumbs = breadcrumbs;
    }

    pub fn active_nav(&self) -> &str {
        &self.active_nav
    }

    pub fn set_active_nav(&mut self, section: String) {
        self.active_nav = section;
    }
}
