//! Wire types mirroring the server's JSON responses.

use chrono::NaiveDate;
use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_picture_url: Option<String>,
    pub role: String,
    pub notification_settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Response of `/api/auth/register` and `/api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub id: Id,
    pub project_id: Id,
    pub title: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

/// A project with its milestones inlined, as the project endpoints
/// return it.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub archived: bool,
    pub created_by: Id,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: Id,
    pub project_id: Id,
    pub parent_task_id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    pub assignee_id: Option<Id>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: Id,
    pub task_id: Id,
    pub user_id: Id,
    pub comment_text: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: Id,
    pub user_id: Id,
    pub notification_type: String,
    pub message: String,
    pub related_project_id: Option<Id>,
    pub related_task_id: Option<Id>,
    pub read_status: bool,
    pub created_at: Timestamp,
}

/// One segment of the navigation breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}
