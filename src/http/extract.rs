// src/http/extract.rs
// Extractors that fail with this service's own error bodies instead of
// axum's plain-text rejections.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use super::handlers::not_found;
use crate::error::RegistryError;

/// `{id}` path segment. A non-integer id is treated as an unmatched route.
pub struct AirdropId(pub u32);

impl<S: Send + Sync> FromRequestParts<S> for AirdropId {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(e) => {
                logd!("Rejected id segment: {e}");
                Err(not_found().await.into_response())
            }
        }
    }
}

/// JSON body; malformed input is a validation error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RegistryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| RegistryError::Validation(format!("Invalid JSON body: {}", e.body_text())))?;
        Ok(Self(value))
    }
}
