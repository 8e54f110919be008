//! # JurisREM Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport client (reqwest) and bearer token providers
//! - The endpoint registry and one API client per resource
//! - The filesystem download sink
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `jurisrem-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod downloads;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiError, ApiErrorCategory, CaseApiClient, DocumentApiClient, MovementApiClient,
    StaticTokenProvider, TokenStore,
};
pub use downloads::DirectoryDownloadSink;
pub use http::{HttpClient, HttpClientBuilder};
