//! Conversions from external infrastructure errors into API and domain errors.

use jurisrem_domain::constants::CONNECTION_ERROR_MESSAGE;
use jurisrem_domain::JurisError;
use reqwest::Error as HttpError;

use crate::api::errors::ApiError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        if err.is_builder() {
            return ApiError::Request(format!("Erro na requisição: {err}"));
        }

        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }

        if let Some(status) = err.status() {
            return ApiError::Server {
                status: status.as_u16(),
                message: format!(
                    "Erro {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                details: None,
            };
        }

        // Timeouts, refused connections and broken bodies: nothing usable came back.
        ApiError::Network(CONNECTION_ERROR_MESSAGE.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → ApiError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Request(format!("Erro na requisição: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → JurisError */
/* -------------------------------------------------------------------------- */

pub(crate) fn io_error(context: &str, err: std::io::Error) -> JurisError {
    JurisError::Io(format!("{context}: {err}"))
}
