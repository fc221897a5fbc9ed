use axum::extract::State;
use axum::{routing::get, Json, Router};
use gatehouse_core::roles::RoleName;
use gatehouse_db::repositories::RoleRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and every fixed role is seeded.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Role names present in the `roles` table, in id order.
    pub seeded_roles: Vec<String>,
}

fn all_roles_seeded(names: &[String]) -> bool {
    RoleName::ALL
        .iter()
        .all(|role| names.iter().any(|name| name == role.as_str()))
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = gatehouse_db::health_check(&state.pool).await.is_ok();

    let seeded_roles = if db_healthy {
        match RoleRepo::list(&state.pool).await {
            Ok(roles) => roles.into_iter().map(|r| r.name).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Role listing failed during health check");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let status = if db_healthy && all_roles_seeded(&seeded_roles) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        seeded_roles,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
