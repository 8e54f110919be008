//! Configuration loading
//!
//! Resolves [`jurisrem_domain::Config`] from environment variables, a
//! probed config file, or defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
