//! Request extractors shared by the contact handlers.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;

use crate::error::AppError;

/// [`axum::extract::Path`] with rejections rendered as the JSON error
/// envelope instead of axum's plain-text body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// A single field value sent as the whole request body.
///
/// `application/json` bodies must be a JSON string or `null` (`null` becomes
/// `None`). Any other content type is read as raw UTF-8 text, unmodified.
#[derive(Debug)]
pub struct FieldValue(pub Option<String>);

impl<S> FromRequest<S> for FieldValue
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_media_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if is_json {
            let value: Option<String> = serde_json::from_slice(&bytes).map_err(|err| {
                AppError::BadRequest(format!("Body must be a JSON string: {err}"))
            })?;
            return Ok(Self(value));
        }

        String::from_utf8(bytes.to_vec())
            .map(|text| Self(Some(text)))
            .map_err(|_| AppError::BadRequest("Body must be valid UTF-8 text".into()))
    }
}

/// Media types are case-insensitive, so `Application/JSON` counts as JSON.
fn is_json_media_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}
