//! Route definitions for the `/test` content boards.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/test`.
///
/// ```text
/// GET /all    -> all_access
/// GET /user   -> user_board       (token)
/// GET /mod    -> moderator_board  (moderator)
/// GET /admin  -> admin_board      (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(user::all_access))
        .route("/user", get(user::user_board))
        .route("/mod", get(user::moderator_board))
        .route("/admin", get(user::admin_board))
}
