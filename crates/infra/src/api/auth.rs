//! Bearer token sources for the JurisREM API
//!
//! The HTTP client asks its provider for a token before every request and
//! attaches `Authorization: Bearer <token>` when one is available.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
/// `Ok(None)` means "send the request unauthenticated".
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Fixed token, typically from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()) }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.clone())
    }
}

/// In-memory token store that can be updated at runtime (login/logout)
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    pub fn new(initial: Option<String>) -> Self {
        Self { token: RwLock::new(initial) }
    }

    pub fn set(&self, token: impl Into<String>) {
        debug!("Access token updated");
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        debug!("Access token cleared");
        *self.token.write() = None;
    }

    pub fn current(&self) -> Option<String> {
        self.token.read().clone()
    }
}

#[async_trait]
impl AccessTokenProvider for TokenStore {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.current())
    }
}
