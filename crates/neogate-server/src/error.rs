//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use neogate_core::ErrorBody;
use neogate_graph::GraphError;

/// Error surfaced by a request handler.
///
/// Every variant renders as `{"error": <message>}` at its status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        // Adapter failures are caught here, at the endpoint boundary.
        // The raw message reaches the caller (documented information
        // disclosure), so the log line is the only server-side trace.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %message, "Request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<GraphError> for ApiError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidIdentifier(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
