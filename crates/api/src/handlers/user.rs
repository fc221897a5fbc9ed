//! Handlers for the `/api/test` content boards.
//!
//! Each board returns a fixed plain-text body; access is enforced entirely by
//! the extractor in the handler signature.

use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireModerator};

/// GET /api/test/all -- no authentication.
pub async fn all_access() -> &'static str {
    "Public Content."
}

/// GET /api/test/user -- any valid access token.
pub async fn user_board(_user: AuthUser) -> &'static str {
    "User Content."
}

/// GET /api/test/mod -- `moderator` role.
pub async fn moderator_board(RequireModerator(_user): RequireModerator) -> &'static str {
    "Moderator Content."
}

/// GET /api/test/admin -- `admin` role.
pub async fn admin_board(RequireAdmin(_user): RequireAdmin) -> &'static str {
    "Admin Content."
}
