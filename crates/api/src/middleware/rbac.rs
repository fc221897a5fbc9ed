//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and then checks the user's current roles
//! in the database. A role guard matches exactly one role: holding `admin`
//! does not satisfy [`RequireModerator`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gatehouse_core::error::CoreError;
use gatehouse_core::roles::RoleName;
use gatehouse_db::repositories::RoleRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `moderator` role. Rejects with 403 Forbidden otherwise.
pub struct RequireModerator(pub AuthUser);

impl FromRequestParts<AppState> for RequireModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_role(parts, state, RoleName::Moderator, "Require Moderator Role!").await?;
        Ok(RequireModerator(user))
    }
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_role(parts, state, RoleName::Admin, "Require Admin Role!").await?;
        Ok(RequireAdmin(user))
    }
}

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: RoleName,
    denial: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;

    let roles = RoleRepo::names_for_user(&state.pool, user.user_id).await?;
    if !roles.iter().any(|name| name == role.as_str()) {
        tracing::debug!(user_id = user.user_id, required = %role, "Role check failed");
        return Err(AppError::Core(CoreError::Forbidden(denial.to_string())));
    }

    Ok(user)
}
