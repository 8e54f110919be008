//! API-specific error types
//!
//! Every transport failure is translated into one [`ApiError`] before it
//! leaves the HTTP client. Messages are the ones shown to end users.

use jurisrem_domain::dto::ErrorDto;
use jurisrem_domain::JurisError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors, used for log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Client errors (4xx except auth)
    Client,
    /// Server errors (5xx)
    Server,
    /// No response received
    Network,
    /// Request could not be built or response could not be read
    Local,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("{0}")]
    Network(String),

    /// The request could not be constructed or sent.
    #[error("{0}")]
    Request(String),

    /// Non-2xx response.
    #[error("{message}")]
    Server { status: u16, message: String, details: Option<serde_json::Value> },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Server { status: 401 | 403, .. } => ApiErrorCategory::Authentication,
            Self::Server { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Server { .. } => ApiErrorCategory::Client,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Request(_) | Self::Decode(_) | Self::Config(_) => ApiErrorCategory::Local,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// The envelope's `message` wins when present and non-empty; otherwise
    /// the message is derived from the status line.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let envelope = serde_json::from_str::<ErrorDto>(body).unwrap_or_default();
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                format!("Erro {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown"))
            });

        Self::Server { status: status.as_u16(), message, details: envelope.details }
    }
}

impl From<ApiError> for JurisError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) => JurisError::Network(message),
            ApiError::Request(message) => JurisError::Request(message),
            ApiError::Server { status, message, details } => JurisError::Api { status, message, details },
            ApiError::Decode(message) => JurisError::Decode(message),
            ApiError::Config(message) => JurisError::Config(message),
        }
    }
}
