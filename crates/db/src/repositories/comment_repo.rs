//! Repository for the `task_comments` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::comment::Comment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, user_id, comment_text, created_at";

/// Provides append and list operations for task comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment to a task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        task_id: Id,
        user_id: Id,
        comment_text: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_comments (task_id, user_id, comment_text) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(task_id)
            .bind(user_id)
            .bind(comment_text)
            .fetch_one(pool)
            .await
    }

    /// List all comments on a task, oldest first.
    pub async fn list_for_task(pool: &PgPool, task_id: Id) -> Result<Vec<Comment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM task_comments WHERE task_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Comment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
