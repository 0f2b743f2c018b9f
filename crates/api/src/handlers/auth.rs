//! Registration and login endpoints.

use axum::extract::State;
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::roles::{is_valid_role, ROLE_TEAM_MEMBER};
use planhub_db::models::user::{CreateUser, User};
use planhub_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{validation_message, AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    pub password: String,
    pub profile_picture_url: Option<String>,
    /// Defaults to `team_member` when omitted.
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Token-plus-profile payload returned by both auth endpoints.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/auth/register` -- create an account and issue a token.
///
/// A duplicate email surfaces as 409 via the `uq_users_email` constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(validation_message(&e))))?;

    if body.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Core(CoreError::Validation(format!(
            "password: must be at least {MIN_PASSWORD_LENGTH} characters"
        ))));
    }

    let role = body.role.unwrap_or_else(|| ROLE_TEAM_MEMBER.to_string());
    if !is_valid_role(&role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "role: unknown role '{role}'"
        ))));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let input = CreateUser {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password_hash,
        profile_picture_url: body.profile_picture_url,
        role,
    };
    let user = UserRepo::create(&state.pool, &input).await?;

    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(Json(AuthResponse { token, user }))
}

/// `POST /api/auth/login` -- verify credentials and issue a token.
///
/// An unknown email and a wrong password produce the same response, so the
/// endpoint cannot be used to probe which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(validation_message(&e))))?;

    let user = UserRepo::find_by_email(&state.pool, &body.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let valid = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(AuthResponse { token, user }))
}
