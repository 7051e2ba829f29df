//! Custom Axum extractors
//!
//! Both reject with `ApiError`, so every client mistake gets a 400 with
//! the usual JSON body instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{AlbumId, ValidationError};

/// Extract and parse an album id from path
pub struct AlbumIdPath(pub AlbumId);

impl<S> FromRequestParts<S> for AlbumIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "album id",
                    reason: "missing or undecodable path segment",
                })
            })?;

        Ok(Self(AlbumId::parse(&id)?))
    }
}

/// JSON request body, decoded with `ApiError` rejections
///
/// The Content-Type header is not checked; clients posting JSON as
/// form data or plain text are still decoded.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::Body {
                reason: e.body_text(),
            })
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::Body {
                reason: e.to_string(),
            })
        })?;
        Ok(Self(value))
    }
}
