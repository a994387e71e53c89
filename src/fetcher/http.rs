//! Job-board HTTP client helper
//!
//! Provides a single GET-and-decode path for all providers:
//! - Fixed headers (application credential, user agent) on every request
//! - Non-success statuses surfaced as [`FetcherError::Transport`]
//! - Undecodable bodies surfaced as [`FetcherError::MalformedResponse`]
//!
//! No retries are attempted; the first failure is returned to the caller.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::fetcher::{FetcherError, FetcherResult};

/// User agent sent with every request (HeadHunter rejects anonymous clients)
pub const DEFAULT_USER_AGENT: &str = concat!("vacancy-salary-stats/", env!("CARGO_PKG_VERSION"));

/// Longest response body excerpt kept in transport errors
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client shared by the provider fetchers
pub struct JobBoardHttpClient {
    client: Arc<Client>,
    base_url: String,
    headers: HeaderMap,
}

impl JobBoardHttpClient {
    /// Create new HTTP client
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client (Arc for cheap cloning)
    /// * `base_url` - Base URL for API endpoints (e.g., "<https://api.hh.ru>")
    pub fn new(client: Arc<Client>, base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self {
            client,
            base_url: base_url.into(),
            headers,
        }
    }

    /// Add a header sent with every request
    ///
    /// # Errors
    /// Returns [`FetcherError::InvalidCredential`] if the name or value is not a valid header
    pub fn with_header(mut self, name: &str, value: &str) -> FetcherResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            FetcherError::InvalidCredential(format!("invalid header name {name}: {e}"))
        })?;
        let mut value = HeaderValue::from_str(value).map_err(|e| {
            FetcherError::InvalidCredential(format!("value for {name} is not a valid header: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Execute GET request with generic deserialization
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path (e.g., "/vacancies")
    /// * `params` - Query parameters as key-value pairs
    ///
    /// # Errors
    /// Returns [`FetcherError::Network`] if no response arrived,
    /// [`FetcherError::Transport`] on a non-success status and
    /// [`FetcherError::MalformedResponse`] if the body does not decode
    pub async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> FetcherResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Making GET request to: {} with {} params", url, params.len());

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| FetcherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Request to {} failed with status {}", url, status);
            return Err(FetcherError::Transport {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        response.json::<T>().await.map_err(|e| {
            FetcherError::MalformedResponse(format!("Failed to deserialize response: {e}"))
        })
    }
}

/// Shorten an error body to a loggable excerpt
fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        trimmed.to_string()
    } else {
        let excerpt: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{excerpt}...")
    }
}
