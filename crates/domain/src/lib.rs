//! # JurisREM Domain
//!
//! Business domain types and models for JurisREM.
//!
//! This crate contains:
//! - Domain entities (Case, Movement, Document) and their closed enums
//! - Wire DTOs exchanged with the JurisREM API
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other JurisREM crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod dto;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
