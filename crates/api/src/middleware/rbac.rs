//! Role-based access control extractors.
//!
//! The only role-gated operation on the platform is sending invitations;
//! every other mutating endpoint accepts any authenticated role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use planhub_core::error::CoreError;
use planhub_core::roles::ROLE_PROJECT_MANAGER;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `project_manager` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn pm_only(RequireProjectManager(user): RequireProjectManager) -> AppResult<Json<()>> {
///     // user is guaranteed to be a project manager here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireProjectManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireProjectManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_PROJECT_MANAGER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Not authorized to send invitations".into(),
            )));
        }
        Ok(RequireProjectManager(user))
    }
}
