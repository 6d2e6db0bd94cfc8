// File: src/extract.rs
// Purpose: Extract submitted form fields from urlencoded or JSON bodies

use crate::error::ErrorResponse;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use tellerform::FormData;

/// Form fields from the request body
///
/// `application/x-www-form-urlencoded` and `application/json` are accepted;
/// anything else is rejected with 415.
#[derive(Debug, Clone)]
pub struct Submission(pub FormData);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Json,
}

fn body_kind(content_type: &str) -> Option<BodyKind> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/x-www-form-urlencoded" => Some(BodyKind::UrlEncoded),
        "application/json" => Some(BodyKind::Json),
        _ => None,
    }
}

#[async_trait]
impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let Some(kind) = body_kind(content_type) else {
            return Err(ErrorResponse::unsupported_media_type(
                "Expected application/x-www-form-urlencoded or application/json",
            ));
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ErrorResponse::bad_request(rejection.body_text()))?;

        let data = match kind {
            BodyKind::UrlEncoded => FormData::from_urlencoded(&body),
            BodyKind::Json => FormData::from_json(serde_json::from_slice(&body)?),
        };

        Ok(Submission(data))
    }
}
