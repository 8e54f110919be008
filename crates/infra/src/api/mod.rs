//! JurisREM resource API clients
//!
//! One client per resource, each implementing the matching port from
//! `jurisrem-core` on top of the shared [`HttpClient`](crate::http::HttpClient).

pub mod auth;
pub mod case_client;
pub mod document_client;
pub mod endpoints;
pub mod errors;
pub mod movement_client;

pub use auth::{AccessTokenProvider, StaticTokenProvider, TokenStore};
pub use case_client::CaseApiClient;
pub use document_client::DocumentApiClient;
pub use errors::{ApiError, ApiErrorCategory};
pub use movement_client::MovementApiClient;
