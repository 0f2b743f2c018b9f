//! User profile endpoints.

use axum::extract::{Path, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use planhub_db::models::user::{UpdateUser, User};
use planhub_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/users/me` -- the authenticated user's own profile.
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        }))?;
    Ok(Json(user))
}

/// `PUT /api/users/me` -- partial profile update. Omitted fields keep
/// their stored values; email and role are immutable here.
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, auth.user_id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        }))?;
    tracing::info!(user_id = %user.id, "Profile updated");
    Ok(Json(user))
}

/// `GET /api/users/{id}` -- look up another user's profile.
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;
    Ok(Json(user))
}

/// `PUT /api/users/{id}` -- partial profile update by id. Any
/// authenticated user may update any profile; there is no ownership
/// check on this route.
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
    Json(body): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;
    tracing::info!(user_id = %user.id, "Profile updated");
    Ok(Json(user))
}
