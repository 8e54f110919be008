//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;
use jurisrem_core::mappers::parse_timezone;
use jurisrem_core::{CaseApi, CaseService, CaseStore, DocumentApi, DownloadSink, MovementApi};
use jurisrem_domain::{Config, JurisError, Result};
use jurisrem_infra::{
    config, CaseApiClient, DirectoryDownloadSink, DocumentApiClient, HttpClient, MovementApiClient,
    TokenStore,
};

const USER_AGENT: &str = concat!("jurisrem/", env!("CARGO_PKG_VERSION"));

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    /// Runtime bearer token; seeded from `api.token`.
    pub tokens: Arc<TokenStore>,
    pub http: Arc<HttpClient>,
    pub service: Arc<CaseService>,
    pub store: Arc<CaseStore>,
    /// Zone used to render timestamps.
    pub timezone: Tz,
}

impl AppContext {
    /// Build the context from the loaded configuration (env, file, defaults).
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::new_with_config(config)
    }

    pub fn new_with_config(config: Config) -> Result<Self> {
        if config.store.page_size == 0 {
            return Err(JurisError::Config("store.page_size must be greater than zero".into()));
        }
        let timezone = parse_timezone(&config.display.timezone)?;

        let tokens = Arc::new(TokenStore::new(config.api.token.clone()));
        let http = Arc::new(
            HttpClient::builder()
                .base_url(config.api.base_url.clone())
                .timeout(Duration::from_millis(config.api.timeout_ms))
                .user_agent(USER_AGENT)
                .token_provider(tokens.clone())
                .build()?,
        );

        let cases: Arc<dyn CaseApi> = Arc::new(CaseApiClient::new(Arc::clone(&http)));
        let movements: Arc<dyn MovementApi> = Arc::new(MovementApiClient::new(Arc::clone(&http)));
        let documents: Arc<dyn DocumentApi> = Arc::new(DocumentApiClient::new(Arc::clone(&http)));
        let downloads: Arc<dyn DownloadSink> =
            Arc::new(DirectoryDownloadSink::new(config.downloads.directory.clone()));

        let service = Arc::new(CaseService::new(cases, movements, documents, downloads));
        let store = Arc::new(CaseStore::new(Arc::clone(&service), config.store.page_size));

        tracing::info!(
            base_url = %http.base_url(),
            timeout_ms = config.api.timeout_ms,
            page_size = config.store.page_size,
            authenticated = tokens.current().is_some(),
            "Application context ready"
        );

        Ok(Self { config, tokens, http, service, store, timezone })
    }
}
