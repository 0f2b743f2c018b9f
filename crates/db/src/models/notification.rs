//! Notification entity model and DTOs.

use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
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

/// DTO for creating a notification for a recipient.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: Id,
    pub notification_type: String,
    pub message: String,
    pub related_project_id: Option<Id>,
    pub related_task_id: Option<Id>,
}

/// Body for `PUT /notifications/{id}`. An absent `read_status` marks the
/// notification read.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotification {
    pub read_status: Option<bool>,
}
