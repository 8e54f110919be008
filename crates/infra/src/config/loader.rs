//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `JURISREM_API_BASE_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! ## Environment Variables
//! - `JURISREM_API_BASE_URL`: API base URL (required for this path)
//! - `JURISREM_API_TIMEOUT_MS`: Request timeout in milliseconds
//! - `JURISREM_API_TOKEN`: Bearer token
//! - `JURISREM_PAGE_SIZE`: Items per page in the case list
//! - `JURISREM_DISPLAY_TIMEZONE`: IANA zone for rendering dates
//! - `JURISREM_DOWNLOAD_DIR`: Directory for downloaded documents
//!
//! ## File Locations
//! `jurisrem.{toml,json}` then `config.{toml,json}`, first in the current
//! working directory, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use jurisrem_domain::{Config, JurisError, Result};

const BASE_URL_VAR: &str = "JURISREM_API_BASE_URL";
const TIMEOUT_VAR: &str = "JURISREM_API_TIMEOUT_MS";
const TOKEN_VAR: &str = "JURISREM_API_TOKEN";
const PAGE_SIZE_VAR: &str = "JURISREM_PAGE_SIZE";
const TIMEZONE_VAR: &str = "JURISREM_DISPLAY_TIMEZONE";
const DOWNLOAD_DIR_VAR: &str = "JURISREM_DOWNLOAD_DIR";

const CONFIG_FILE_NAMES: [&str; 4] = ["jurisrem.toml", "jurisrem.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `JurisError::Config` when environment values are malformed or
/// a config file exists but cannot be parsed.
pub fn load() -> Result<Config> {
    if std::env::var_os(BASE_URL_VAR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `JURISREM_API_BASE_URL` must be set; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `JurisError::Config` if the base URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.api.base_url = env_var(BASE_URL_VAR)?;
    if let Some(timeout) = env_parse::<u64>(TIMEOUT_VAR, "timeout")? {
        config.api.timeout_ms = timeout;
    }
    config.api.token = std::env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty());

    if let Some(page_size) = env_parse::<u32>(PAGE_SIZE_VAR, "page size")? {
        if page_size == 0 {
            return Err(JurisError::Config("Invalid page size: must be greater than zero".into()));
        }
        config.store.page_size = page_size;
    }
    if let Ok(timezone) = std::env::var(TIMEZONE_VAR) {
        config.display.timezone = timezone;
    }
    if let Ok(directory) = std::env::var(DOWNLOAD_DIR_VAR) {
        config.downloads.directory = directory;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is picked by
/// extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `JurisError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(JurisError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            JurisError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| JurisError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| JurisError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| JurisError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(JurisError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    probe_in(&dirs)
}

fn probe_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| JurisError::Config(format!("Missing required environment variable: {}", key)))
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| JurisError::Config(format!("Invalid {}: {}", what, e))),
        Err(_) => Ok(None),
    }
}
