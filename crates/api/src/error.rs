use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gatehouse_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Message sent in place of any internal failure detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers and extractors.
///
/// Renders as `{"error": <message>, "code": <CODE>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level failures from a `Validate` derive.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => sqlx_parts(err),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                validation_message(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    let (status, code, msg) = match err {
        CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            return internal();
        }
    };
    (status, code, msg.clone())
}

/// One message per failing field, ordered by field name and joined with `; `.
///
/// A field with no custom message falls back to its validator code.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Signup-facing message for a unique violation on the users table.
///
/// Two concurrent signups can both pass the pre-insert duplicate checks; the
/// loser hits the constraint and gets the same 400 as the sequential case.
pub(crate) fn duplicate_user_message(constraint: &str) -> Option<&'static str> {
    match constraint {
        "uq_users_username" => Some("Failed! Username is already in use!"),
        "uq_users_email" => Some("Failed! Email is already in use!"),
        _ => None,
    }
}

/// Map a sqlx error onto the response envelope.
///
/// - `RowNotFound` maps to 404.
/// - Username/email unique violations map to the signup 400 messages.
/// - Other `uq_*` unique violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn sqlx_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if let Some(message) = duplicate_user_message(constraint) {
                return (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.to_string());
            }
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Unique violation on unnamed constraint");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
