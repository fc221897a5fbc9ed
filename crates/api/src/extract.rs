//! Body extractor accepting either JSON or URL-encoded form payloads.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the request body as `application/x-www-form-urlencoded` when
/// the `Content-Type` says so, and as JSON otherwise.
///
/// The form branch collects repeated keys (`roles=a&roles=b`) into a `Vec`
/// field, and a single occurrence becomes a one-element `Vec`. Rejections
/// become [`AppError::BadRequest`] so malformed bodies share the standard
/// error envelope.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

fn is_form_content(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_content(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return Ok(JsonOrForm(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonOrForm(value))
    }
}
