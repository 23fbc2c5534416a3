//! Uniform JSON gateway for the HarPalJob REST backend.
//!
//! Every resource client funnels through [`ApiClient::request`], which
//! attaches the session's bearer token, serializes the body, and turns any
//! non-2xx status into [`ApiError::Http`]. There is no retry and no cache;
//! each call is a single round trip.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::session::Session;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Connection settings for an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL every path is appended to, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Errors from the gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. The body is discarded.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request could not complete (connection refused, DNS, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A 2xx body did not match the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The resource has no such operation on the backend.
    #[error("{resource} does not support {operation}")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },
}

impl ApiError {
    /// HTTP status for [`ApiError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Convenience type alias for gateway results.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client bound to one backend and one session.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: Session,
}

impl ApiClient {
    /// Create a client for `base_url` using `session` for authentication.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>, session: Session) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
        }
    }

    /// Build a client from [`GatewayConfig`], applying the timeout if set.
    pub fn from_config(config: &GatewayConfig, session: Session) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Network)?;
        Ok(Self::with_client(http, config.base_url.clone(), session))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Issue one request and decode the JSON answer.
    ///
    /// An empty 2xx body decodes as JSON `null`, so callers expecting no
    /// content can ask for `()` or `Option<T>`.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Request failed to complete");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "Backend returned an error status");
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        tracing::debug!(%method, path, status = status.as_u16(), bytes = bytes.len(), "Request completed");

        decode_body(&bytes)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(bytes)?)
}
