//! Handlers for the `/api/auth` resource (signup, signin).

use axum::extract::State;
use axum::Json;
use gatehouse_core::error::CoreError;
use gatehouse_core::roles::{authority, RoleName};
use gatehouse_core::types::{DbId, RoleId};
use gatehouse_db::models::user::CreateUser;
use gatehouse_db::repositories::{RoleRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    /// Requested role names. Absent or empty means `["user"]`. Form bodies
    /// may send `roles=admin`, repeat the key, or use `roles[]`.
    #[serde(default, alias = "roles[]")]
    pub roles: Vec<String>,
}

/// Request body for `POST /api/auth/signin`.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Plain `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// `ROLE_*` authorities, ordered by role id.
    pub roles: Vec<String>,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Register a new account. Rejects duplicate usernames/emails and unknown
/// role names with 400 before anything is written.
pub async fn signup(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<SignupRequest>,
) -> AppResult<Json<MessageResponse>> {
    input.validate()?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(
            "Failed! Username is already in use!".into(),
        ));
    }

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Failed! Email is already in use!".into()));
    }

    let roles = resolve_requested_roles(&input.roles)?;
    let role_ids: Vec<RoleId> = roles.iter().map(|r| r.id()).collect();

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };
    let user = UserRepo::create_with_roles(&state.pool, &create_dto, &role_ids).await?;

    tracing::info!(user_id = user.id, username = %user.username, ?roles, "User registered");

    Ok(Json(MessageResponse {
        message: "User was registered successfully!".into(),
    }))
}

/// POST /api/auth/signin
///
/// Authenticate with username + password and return an access token.
pub async fn signin(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<SigninRequest>,
) -> AppResult<Json<SigninResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("User Not found.".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid Password!".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let roles = RoleRepo::names_for_user(&state.pool, user.id)
        .await?
        .iter()
        .map(|name| authority(name))
        .collect();

    tracing::info!(user_id = user.id, "User signed in");

    Ok(Json(SigninResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        roles,
        access_token,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse requested role names, defaulting to `user` and dropping duplicates.
fn resolve_requested_roles(requested: &[String]) -> Result<Vec<RoleName>, CoreError> {
    if requested.is_empty() {
        return Ok(vec![RoleName::User]);
    }

    let mut roles = Vec::with_capacity(requested.len());
    for name in requested {
        let role: RoleName = name.parse()?;
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_roles_default_to_user() {
        assert_eq!(resolve_requested_roles(&[]).unwrap(), vec![RoleName::User]);
    }

    #[test]
    fn requested_roles_are_deduplicated_in_request_order() {
        let requested = names(&["admin", "user", "admin"]);
        assert_eq!(
            resolve_requested_roles(&requested).unwrap(),
            vec![RoleName::Admin, RoleName::User]
        );
    }

    #[test]
    fn unknown_role_names_are_rejected() {
        let requested = names(&["user", "root"]);
        assert_matches!(
            resolve_requested_roles(&requested),
            Err(CoreError::Validation(msg)) if msg == "Failed! Role does not exist = root"
        );
    }

    #[test]
    fn signup_validation_flags_bad_email_and_short_username() {
        let input = SignupRequest {
            username: "ab".into(),
            email: "not-an-email".into(),
            password: "pw".into(),
            roles: Vec::new(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("password"));
    }

    fn signup(username: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.into(),
            email: "someone@test.com".into(),
            password: password.into(),
            roles: Vec::new(),
        }
    }

    #[test]
    fn username_length_bounds_are_inclusive() {
        assert!(signup(&"a".repeat(3), "pw").validate().is_ok());
        assert!(signup(&"a".repeat(32), "pw").validate().is_ok());

        let errors = signup(&"a".repeat(33), "pw").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn empty_password_is_rejected() {
        let errors = signup("sam", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn json_roles_array_and_missing_roles_deserialize() {
        let with_roles: SignupRequest = serde_json::from_str(
            r#"{"username":"sam","email":"s@t.com","password":"pw","roles":["mod","admin"]}"#,
        )
        .unwrap();
        assert_eq!(with_roles.roles, vec!["mod", "admin"]);

        let without: SignupRequest =
            serde_json::from_str(r#"{"username":"sam","email":"s@t.com","password":"pw"}"#)
                .unwrap();
        assert!(without.roles.is_empty());
    }

    #[test]
    fn signin_response_uses_camel_case_token_field() {
        let response = SigninResponse {
            id: 7,
            username: "sam".into(),
            email: "sam@test.com".into(),
            roles: vec!["ROLE_USER".into()],
            access_token: "tok".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["accessToken"], "tok");
        assert!(json.get("access_token").is_none());
    }
}
