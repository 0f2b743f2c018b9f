//! User invitation entity model.

use planhub_core::types::{Id, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_invitations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invitation {
    pub id: Id,
    pub inviter_id: Id,
    pub invitee_email: String,
    pub role: String,
    /// `pending`, `accepted`, or `declined`.
    pub status: String,
    pub created_at: Timestamp,
}
