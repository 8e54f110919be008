//! # JurisREM Core
//!
//! Business logic layer - no HTTP or filesystem code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the JurisREM resource APIs
//! - The mapper layer (DTO/entity conversion, display formatters)
//! - The case service with request validation
//! - The case list store
//!
//! ## Architecture Principles
//! - Only depends on `jurisrem-domain`
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod cases;
pub mod mappers;
pub mod store;

pub use cases::ports::{CaseApi, DocumentApi, DownloadSink, MovementApi};
pub use cases::CaseService;
pub use store::{CaseState, CaseStore};
