//! User invitation endpoints. Sending is restricted to project managers.

use axum::extract::State;
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::roles::is_valid_role;
use planhub_db::models::invitation::Invitation;
use planhub_db::repositories::InvitationRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{validation_message, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireProjectManager;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct InvitationRequest {
    #[validate(email(message = "must be a valid email"))]
    pub invitee_email: String,
    pub role: String,
}

/// `POST /api/invitations` -- record a pending invitation.
///
/// Delivery of the invitation email is out of scope; the row records
/// intent and the chosen role for the invitee.
pub async fn create_invitation(
    State(state): State<AppState>,
    RequireProjectManager(auth): RequireProjectManager,
    Json(body): Json<InvitationRequest>,
) -> AppResult<Json<Invitation>> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(validation_message(&e))))?;
    if !is_valid_role(&body.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "role: unknown role '{}'",
            body.role
        ))));
    }

    let invitation =
        InvitationRepo::create(&state.pool, auth.user_id, &body.invitee_email, &body.role).await?;
    tracing::info!(
        inviter_id = %auth.user_id,
        invitee = %invitation.invitee_email,
        "Invitation sent"
    );
    Ok(Json(invitation))
}

/// `GET /api/invitations` -- invitations sent by the authenticated user.
pub async fn list_invitations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Invitation>>> {
    let invitations = InvitationRepo::list_for_inviter(&state.pool, auth.user_id).await?;
    Ok(Json(invitations))
}
