//! User entity model and DTOs.

use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// The password hash never leaves the server: it is skipped during
/// serialization so no API response can carry it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub profile_picture_url: Option<String>,
    pub role: String,
    pub notification_settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new user at registration.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture_url: Option<String>,
    pub role: String,
}

/// DTO for a profile update. All fields are optional; `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub notification_settings: Option<serde_json::Value>,
}
