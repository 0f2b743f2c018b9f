//! Task comment entity model and DTO.

use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `task_comments` table. Comments are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: Id,
    pub task_id: Id,
    pub user_id: Id,
    pub comment_text: String,
    pub created_at: Timestamp,
}

/// DTO for adding a comment to a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub comment_text: String,
}
