use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the sam + mohit application.";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / -- static welcome payload.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
