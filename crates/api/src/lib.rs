//! # JurisREM App
//!
//! Composition root and command-line front end.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Logging setup
//! - CLI commands that drive the case list store
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod context;
pub mod utils;

pub use context::*;
