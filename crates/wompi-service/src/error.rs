//! API error types and responses.
//!
//! Every failure surfaced by a route answers HTTP 500. Callers tell errors
//! apart by the JSON payload only:
//!
//! - local failures: `{"error": {"name": "...", "message": "..."}}`
//! - undecodable 2xx bodies: the local shape plus `status` and `response`
//!   inside `error`
//! - remote failures: `{"name": "RemoteError", "message": "...", "status": 422, "response": {...}}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use wompi_client::ClientError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A record the flow depends on is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote API call failed.
    #[error("remote API error: {message}")]
    Remote {
        /// Remote HTTP status, when a response was received.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// Remote response body, when one was received.
        body: Option<serde_json::Value>,
    },

    /// The remote call succeeded but its body did not have the expected shape.
    #[error("undecodable response: {message}")]
    Decode {
        /// Remote HTTP status.
        status: u16,
        /// Decoder message.
        message: String,
        /// Raw remote body, when one was received.
        body: Option<serde_json::Value>,
    },

    /// Bad request - invalid query or path input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Envelope for locally raised errors.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    name: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<serde_json::Value>,
}

/// Envelope for remote failures, with the remote body attached.
#[derive(Debug, Serialize)]
struct RemoteErrorResponse {
    name: &'static str,
    message: String,
    status: Option<u16>,
    response: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let local = |name: &'static str, message: String| ErrorResponse {
            error: ErrorBody {
                name,
                message,
                status: None,
                response: None,
            },
        };

        match self {
            Self::Remote {
                status: remote_status,
                message,
                body,
            } => {
                tracing::warn!(
                    remote_status = ?remote_status,
                    message = %message,
                    "Remote API call failed"
                );
                let body = RemoteErrorResponse {
                    name: "RemoteError",
                    message,
                    status: remote_status,
                    response: body,
                };
                (status, Json(body)).into_response()
            }
            Self::NotFound(what) => {
                tracing::debug!(what = %what, "Record not found");
                (status, Json(local("NotFoundError", format!("{what} not found")))).into_response()
            }
            Self::Decode {
                status: remote_status,
                message,
                body,
            } => {
                tracing::warn!(
                    remote_status = %remote_status,
                    error = %message,
                    "Remote API response did not decode"
                );
                let body = ErrorResponse {
                    error: ErrorBody {
                        name: "DecodeError",
                        message,
                        status: Some(remote_status),
                        response: body,
                    },
                };
                (status, Json(body)).into_response()
            }
            Self::InvalidRequest(msg) => {
                tracing::debug!(error = %msg, "Invalid request");
                (status, Json(local("InvalidRequestError", msg))).into_response()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (status, Json(local("InternalError", msg))).into_response()
            }
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Remote {
                status,
                message,
                body,
            } => Self::Remote {
                status,
                message,
                body,
            },
            ClientError::Decode {
                status,
                message,
                body,
            } => Self::Decode {
                status,
                message,
                body,
            },
            ClientError::NotFound(what) => Self::NotFound(what),
            ClientError::InvalidInput(msg) => Self::InvalidRequest(msg),
            ClientError::Serialization(e) => Self::Internal(e.to_string()),
            ClientError::Configuration(msg) => Self::Internal(msg),
        }
    }
}
