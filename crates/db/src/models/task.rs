//! Task entity model and DTOs.

use chrono::NaiveDate;
use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
///
/// `parent_task_id` is an adjacency reference enabling subtask grouping.
/// Neither nesting depth nor cycles are enforced at this layer.
#[derive(Debug, Clone, FromRow, Serialize)]
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

/// DTO for creating a task under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub name: String,
    pub description: Option<String>,
    pub parent_task_id: Option<Id>,
    pub assignee_id: Option<Id>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// DTO for a partial task update. Status transitions are unconstrained:
/// any stored status may be overwritten with any other.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_task_id: Option<Id>,
    pub assignee_id: Option<Id>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
}
