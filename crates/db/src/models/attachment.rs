//! Task attachment metadata model.
//!
//! The binary payload lives in blob storage; this table holds metadata only.

use planhub_core::types::{Id, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `task_attachments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attachment {
    pub id: Id,
    pub task_id: Id,
    pub user_id: Id,
    /// Original filename as uploaded by the client.
    pub file_name: String,
    /// Public URL under which the stored file is served.
    pub file_url: String,
    pub file_type: String,
    pub uploaded_at: Timestamp,
}

/// DTO for recording an uploaded attachment.
#[derive(Debug, Clone)]
pub struct CreateAttachment {
    pub task_id: Id,
    pub user_id: Id,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
}
