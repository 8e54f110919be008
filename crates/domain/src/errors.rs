//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for JurisREM
///
/// `Validation` and `Operation` carry messages meant for the end user; the
/// remaining variants describe what went wrong below the service layer and
/// are normally only seen in logs.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum JurisError {
    /// Input rejected locally, before any network call.
    #[error("{0}")]
    Validation(String),

    /// No response was received from the server.
    #[error("{0}")]
    Network(String),

    /// The server answered with an error envelope.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },

    /// The request could not be built.
    #[error("{0}")]
    Request(String),

    /// A successful response carried a body that could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Normalised failure of a business operation.
    #[error("{0}")]
    Operation(String),
}

impl JurisError {
    /// HTTP status reported by the server, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised by local validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for JurisREM operations
pub type Result<T> = std::result::Result<T, JurisError>;
