//! Client error types.

use wompi_core::CoreError;

/// Errors that can occur when using the Wompi clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The remote call failed: transport error or non-2xx response.
    #[error("remote API error: {message}")]
    Remote {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// Response body, when one was received.
        body: Option<serde_json::Value>,
    },

    /// A 2xx response whose body does not match the expected shape.
    #[error("failed to decode response (status {status}): {message}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// Decoder message.
        message: String,
        /// Raw response body, when non-empty.
        body: Option<serde_json::Value>,
    },

    /// The remote call succeeded but the expected record is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid caller input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of the response behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => *status,
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            body: None,
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(what) => Self::NotFound(what),
            CoreError::InvalidId(e) => Self::InvalidInput(e.to_string()),
        }
    }
}
