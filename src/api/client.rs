//! Generic JSON request function for the counselling API
//!
//! [`ApiClient::request`] is the single place the client talks HTTP. It
//! attaches the bearer token from durable storage, always sends
//! `Content-Type: application/json`, and normalizes both outcomes:
//!
//! - 2xx: the body is decoded into the caller's expected type. The caller's
//!   static type is trusted; nothing beyond deserialization is checked.
//! - anything else: the body is parsed as JSON to pull out `detail`; when
//!   that fails the HTTP status text is used. Either way the caller gets one
//!   [`ApiError`] whose display text is that message.
//!
//! The client never retries, never refreshes tokens, and never queues.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::token_store::TokenStore;
use crate::config::Config;
use crate::error::{ApiError, GradpathError, Result};

use super::applications::ApplicationsApi;
use super::auth::AuthApi;
use super::counsellor::CounsellorApi;
use super::dashboard::DashboardApi;
use super::profile::ProfileApi;
use super::todos::TodosApi;
use super::universities::UniversitiesApi;

/// HTTP client bound to one backend and one token store.
///
/// Cloning is cheap; clones share the connection pool and the token store.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use gradpath::api::ApiClient;
/// use gradpath::auth::token_store::MemoryTokenStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = ApiClient::new("http://localhost:8000", Arc::new(MemoryTokenStore::default()))?;
/// let todos = client.todos().list().await?;
/// println!("{} todos", todos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for `base_url`, reading tokens from `tokens`.
    ///
    /// Trailing slashes on `base_url` are dropped so paths can be appended
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GradpathError::Http`] if the TLS backend fails to initialise.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gradpath/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GradpathError::Http)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Creates a client from validated configuration
    pub fn from_config(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        Self::new(config.base_url(), tokens)
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store consulted on every request
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Performs one JSON request.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, starting with `/`
    /// * `body` - Optional body, serialized as JSON
    /// * `headers` - Extra headers. Each replaces a default of the same
    ///   name, except `Authorization`, which the stored token always wins
    ///
    /// # Errors
    ///
    /// Returns [`GradpathError::Api`] for transport failures, malformed
    /// headers and non-2xx responses, and a storage error if the token
    /// cannot be read.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let header_map = build_headers(headers, self.tokens.load()?.as_deref())?;
        let mut req = self.http.request(method.clone(), &url).headers(header_map);

        if let Some(body) = body {
            req = req.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(method = %method, path = %path, "API request");

        let response = req.send().await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, "API request failed: {}", e);
            GradpathError::Api(ApiError::transport(e.to_string()))
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GradpathError::Api(ApiError::new(Some(status.as_u16()), None, e.to_string())))?;

        if !status.is_success() {
            let error = error_from_body(status, &bytes);
            tracing::debug!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                "API error: {}",
                error
            );
            return Err(GradpathError::Api(error).into());
        }

        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "API response");

        serde_json::from_slice(&bytes).map_err(|e| {
            GradpathError::Api(ApiError::new(
                Some(status.as_u16()),
                None,
                format!("Failed to decode response from {}: {}", path, e),
            ))
            .into()
        })
    }

    /// `GET path`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None, &[]).await
    }

    /// `POST path` with a JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    /// `POST path` without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::POST, path, None, &[]).await
    }

    /// `PUT path` with a JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    /// `PATCH path` with a JSON body
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(body), &[]).await
    }

    /// `DELETE path`
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, None, &[]).await
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    pub fn universities(&self) -> UniversitiesApi<'_> {
        UniversitiesApi::new(self)
    }

    pub fn todos(&self) -> TodosApi<'_> {
        TodosApi::new(self)
    }

    pub fn counsellor(&self) -> CounsellorApi<'_> {
        CounsellorApi::new(self)
    }

    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(self)
    }
}

/// Request headers: JSON content type, then `extra` (replacing by name),
/// then the bearer token when one is stored.
pub(crate) fn build_headers(extra: &[(&str, &str)], token: Option<&str>) -> Result<HeaderMap> {
    let invalid = |name: &str, e: &dyn std::fmt::Display| {
        GradpathError::Api(ApiError::transport(format!("Invalid header {}: {}", name, e)))
    };

    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(name, &e))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(name, &e))?;
        map.insert(header_name, header_value);
    }

    if let Some(token) = token {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| invalid("authorization", &e))?;
        map.insert(AUTHORIZATION, bearer);
    }

    Ok(map)
}

/// Builds the error for a non-2xx response.
///
/// A JSON body with a string `detail` yields that string. Any other JSON
/// body yields its compact text. A body that is not JSON yields the status
/// text. A string `code` field, when present, is kept as the error code.
pub(crate) fn error_from_body(status: StatusCode, body: &[u8]) -> ApiError {
    let status_text = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    let parsed: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return ApiError::new(Some(status.as_u16()), None, status_text),
    };

    let code = parsed
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);

    let message = match parsed.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        _ => parsed.to_string(),
    };

    ApiError::new(Some(status.as_u16()), code, message)
}
