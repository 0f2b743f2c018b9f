//! Task comment endpoints. Comments are append-only; each new comment is
//! broadcast as a `comment_event`.

use axum::extract::{Path, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use planhub_db::models::comment::{Comment, CreateComment};
use planhub_db::repositories::{CommentRepo, TaskRepo};
use planhub_events::{PlatformEvent, EVENT_COMMENT};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/tasks/{task_id}/comments` -- all comments, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Id>,
) -> AppResult<Json<Vec<Comment>>> {
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task_id,
        }));
    }
    let comments = CommentRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(comments))
}

/// `POST /api/tasks/{task_id}/comments` -- append a comment.
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<Id>,
    Json(body): Json<CreateComment>,
) -> AppResult<Json<Comment>> {
    if body.comment_text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "comment_text: must not be empty".into(),
        )));
    }
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task_id,
        }));
    }

    let comment =
        CommentRepo::create(&state.pool, task_id, auth.user_id, &body.comment_text).await?;

    match serde_json::to_value(&comment) {
        Ok(payload) => state
            .event_bus
            .publish(PlatformEvent::broadcast(EVENT_COMMENT, payload)),
        Err(err) => tracing::error!(error = %err, "Failed to serialize comment event"),
    }

    tracing::info!(comment_id = %comment.id, task_id = %task_id, "Comment added");
    Ok(Json(comment))
}
