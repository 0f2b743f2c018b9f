//! Typed REST client for the Planhub API.

use planhub_core::types::Id;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{AuthResponse, Comment, Notification, Project, Task, User};

/// HTTP client for the REST surface. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a server base URL, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    /// Send a request and decode the JSON body, converting error statuses
    /// into [`ClientError::Api`] with the server's `error` message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body["error"]
                .as_str()
                .unwrap_or("unknown server error")
                .to_string(),
            Err(_) => "unknown server error".to_string(),
        };
        Err(ClientError::Api { status, message })
    }

    // --- Auth ---

    /// `POST /api/auth/register`
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<AuthResponse, ClientError> {
        let body = serde_json::json!({
            "first_name": first_name,
            "last_name": last_name,
            "email": email,
            "password": password,
            "role": role,
        });
        self.send(self.request(Method::POST, "/api/auth/register").json(&body))
            .await
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send(self.request(Method::POST, "/api/auth/login").json(&body))
            .await
    }

    // --- Profile ---

    /// `GET /api/users/me`
    pub async fn fetch_profile(&self, token: &str) -> Result<User, ClientError> {
        self.send(self.request(Method::GET, "/api/users/me").bearer_auth(token))
            .await
    }

    // --- Projects and tasks ---

    /// `GET /api/projects`, optionally listing the archive instead.
    pub async fn list_projects(
        &self,
        token: &str,
        archived: bool,
    ) -> Result<Vec<Project>, ClientError> {
        let path = if archived {
            "/api/projects?archived=true"
        } else {
            "/api/projects"
        };
        self.send(self.request(Method::GET, path).bearer_auth(token))
            .await
    }

    /// `GET /api/projects/{id}/tasks`
    pub async fn list_tasks(&self, token: &str, project_id: Id) -> Result<Vec<Task>, ClientError> {
        self.send(
            self.request(Method::GET, &format!("/api/projects/{project_id}/tasks"))
                .bearer_auth(token),
        )
        .await
    }

    /// `GET /api/tasks/{id}/comments`
    pub async fn list_comments(&self, token: &str, task_id: Id) -> Result<Vec<Comment>, ClientError> {
        self.send(
            self.request(Method::GET, &format!("/api/tasks/{task_id}/comments"))
                .bearer_auth(token),
        )
        .await
    }

    // --- Notifications ---

    /// `GET /api/notifications`
    pub async fn list_notifications(&self, token: &str) -> Result<Vec<Notification>, ClientError> {
        self.send(self.request(Method::GET, "/api/notifications").bearer_auth(token))
            .await
    }

    /// `PUT /api/notifications/{id}` with an empty body, marking it read.
    pub async fn mark_notification_read(
        &self,
        token: &str,
        id: Id,
    ) -> Result<Notification, ClientError> {
        self.send(
            self.request(Method::PUT, &format!("/api/notifications/{id}"))
                .bearer_auth(token)
                .json(&serde_json::json!({})),
        )
        .await
    }
}
