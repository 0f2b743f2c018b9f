//! Repository for the `notifications` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, notification_type, message, related_project_id, \
     related_task_id, read_status, created_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification for a recipient, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications \
                (user_id, notification_type, message, related_project_id, related_task_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(&input.notification_type)
            .bind(&input.message)
            .bind(input.related_project_id)
            .bind(input.related_task_id)
            .fetch_one(pool)
            .await
    }

    /// List all notifications for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Id,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set a notification's read flag by id alone, returning the updated
    /// row. The caller is not required to own the notification.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_read_status(
        pool: &PgPool,
        id: Id,
        read_status: bool,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET read_status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(read_status)
            .fetch_optional(pool)
            .await
    }
}
