//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS, DEFAULT_DISPLAY_TIMEZONE, DEFAULT_DOWNLOAD_DIR,
    DEFAULT_PAGE_SIZE,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub downloads: DownloadConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Bearer token attached to every request when present.
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
            token: None,
        }
    }
}

/// Case list store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub page_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone used when rendering timestamps.
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_DISPLAY_TIMEZONE.to_string() }
    }
}

/// Where downloaded documents are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub directory: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self { directory: DEFAULT_DOWNLOAD_DIR.to_string() }
    }
}
