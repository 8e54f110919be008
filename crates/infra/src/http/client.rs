use std::sync::Arc;
use std::time::Duration;

use jurisrem_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::api::auth::{AccessTokenProvider, StaticTokenProvider};
use crate::api::errors::ApiError;

/// HTTP client for the JurisREM API.
///
/// Resolves paths against the base URL, sends JSON by default, attaches the
/// bearer token and turns every failure into an [`ApiError`]. There are no
/// retries.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/processos/listagem`.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?.query(query);
        decode(self.send(request).await?).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?.json(body);
        decode(self.send(request).await?).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.request(Method::PUT, path)?.json(body);
        decode(self.send(request).await?).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path)?.json(body);
        decode(self.send(request).await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, path)?;
        decode(self.send(request).await?).await
    }

    /// POST a multipart form.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?.multipart(form);
        decode(self.send(request).await?).await
    }

    /// GET a binary body.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.request(Method::GET, path)?.header(ACCEPT, "*/*");
        let response = self.send(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.client.request(method, self.url(path)?))
    }

    /// Attach the token, execute and reject non-2xx responses.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match self.tokens.access_token().await? {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        };

        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%method, %url, error = %err, "HTTP request failed");
                return Err(err.into());
            }
        };

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        warn!(%method, %url, %status, category = ?err.category(), error = %err, "API returned an error");
        Err(err)
    }
}

/// Decode a JSON body. Empty and 204/205 bodies decode as `null`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        Default::default()
    } else {
        response.bytes().await?
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
            ApiError::Decode(format!(
                "Empty response ({}), but a body was expected",
                status.as_u16()
            ))
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: HeaderMap,
    tokens: Option<Arc<dyn AccessTokenProvider>>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            user_agent: None,
            default_headers: HeaderMap::new(),
            tokens: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Extra headers sent with every request, on top of the JSON defaults.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    pub fn token_provider(mut self, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid API base URL '{}': {e}", self.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.extend(self.default_headers);

        let mut builder = ReqwestClient::builder().timeout(self.timeout).default_headers(headers).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(HttpClient {
            client,
            base_url,
            tokens: self.tokens.unwrap_or_else(|| Arc::new(StaticTokenProvider::default())),
        })
    }
}
