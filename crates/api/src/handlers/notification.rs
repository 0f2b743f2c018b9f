//! Notification endpoints.

use axum::extract::{Path, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use planhub_db::models::notification::{Notification, UpdateNotification};
use planhub_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/notifications` -- the user's notifications, newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(notifications))
}

/// `PUT /api/notifications/{id}` -- set the read flag. An empty body (or
/// an absent `read_status`) marks the notification read. The row is
/// addressed by id alone; there is no ownership check on this route.
pub async fn update_notification(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
    Json(body): Json<UpdateNotification>,
) -> AppResult<Json<Notification>> {
    let read_status = body.read_status.unwrap_or(true);
    let notification = NotificationRepo::set_read_status(&state.pool, id, read_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "notification",
            id,
        }))?;
    Ok(Json(notification))
}
