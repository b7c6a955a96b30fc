//! # Service Error Taxonomy
//!
//! Every failure a handler can produce collapses into one of three cases:
//! the caller sent bad input, the caller addressed a record that does not
//! exist, or the service itself faulted. Each case owns exactly one status
//! code, and every error body on the wire is the same single-field JSON
//! object so clients never need to branch on payload shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for any 500, regardless of the underlying cause.
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

/// Wire shape of every error payload the service emits.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure cases surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or path failed validation. Reported verbatim.
    #[error("{0}")]
    Validation(String),

    /// A well-formed request addressed a record that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected fault inside the service. The cause is logged on the
    /// server; the client only ever sees a generic message.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(ref cause) => {
                tracing::error!("Internal error: {:?}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
