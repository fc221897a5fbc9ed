pub mod auth;
pub mod health;
pub mod home;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/signup          register (public)
/// /auth/signin          sign in (public)
///
/// /test/all             public content
/// /test/user            any signed-in user
/// /test/mod             moderator only
/// /test/admin           admin only
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/test", user::router())
}
