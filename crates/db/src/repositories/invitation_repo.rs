//! Repository for the `user_invitations` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::invitation::Invitation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, inviter_id, invitee_email, role, status, created_at";

/// Provides operations for user invitations.
pub struct InvitationRepo;

impl InvitationRepo {
    /// Record a pending invitation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        inviter_id: Id,
        invitee_email: &str,
        role: &str,
    ) -> Result<Invitation, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_invitations (inviter_id, invitee_email, role) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(inviter_id)
            .bind(invitee_email)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// List invitations sent by a user, newest first.
    pub async fn list_for_inviter(
        pool: &PgPool,
        inviter_id: Id,
    ) -> Result<Vec<Invitation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_invitations WHERE inviter_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(inviter_id)
            .fetch_all(pool)
            .await
    }
}
