// src/error.rs
//! Request-level failures and their HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// Unknown id.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl RegistryError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing required field: {field}"))
    }

    pub fn invalid_date() -> Self {
        Self::Validation(s!("Invalid date format. Use YYYY-MM-DD"))
    }

    pub fn airdrop_not_found(id: u32) -> Self {
        Self::NotFound(format!("Airdrop with id {id} not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_)   => StatusCode::NOT_FOUND,
            Self::Internal(_)   => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            loge!("{}: {}", status, self);
        } else {
            logd!("{}: {}", status, self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
