//! Repository for the `task_attachments` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::attachment::{Attachment, CreateAttachment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, user_id, file_name, file_url, file_type, uploaded_at";

/// Provides metadata operations for task attachments. The file payload is
/// written to blob storage before the row is inserted.
pub struct AttachmentRepo;

impl AttachmentRepo {
    /// Record an uploaded attachment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAttachment) -> Result<Attachment, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_attachments (task_id, user_id, file_name, file_url, file_type) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(input.task_id)
            .bind(input.user_id)
            .bind(&input.file_name)
            .bind(&input.file_url)
            .bind(&input.file_type)
            .fetch_one(pool)
            .await
    }

    /// List all attachments on a task, oldest upload first.
    pub async fn list_for_task(pool: &PgPool, task_id: Id) -> Result<Vec<Attachment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM task_attachments WHERE task_id = $1 ORDER BY uploaded_at");
        sqlx::query_as::<_, Attachment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
