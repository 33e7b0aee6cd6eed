//! Reqwest-backed API client
//!
//! This adapter owns transport details only: URL building, status mapping
//! and JSON decoding into domain types.

use std::sync::Arc;
use std::time::Duration;

use cdash_core::api_error::DEFAULT_NETWORK_ERROR_MESSAGE;
use cdash_core::prelude::*;
use cdash_core::{ApiError, Post, User};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::source::DataSource;

/// Public demo API used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client for the users/posts API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    /// Base URL without trailing slash
    base_url: String,
    /// Message reported for transport failures
    network_error_message: Arc<str>,
}

impl ApiClient {
    /// Build a client for `base_url`
    ///
    /// `timeout` of `None` leaves the transport default in place.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("invalid API base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "API base URL must use http or https: {base_url}"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            network_error_message: Arc::from(DEFAULT_NETWORK_ERROR_MESSAGE),
        })
    }

    /// Replace the message reported when the server cannot be reached
    pub fn with_network_error_message(mut self, message: impl AsRef<str>) -> Self {
        self.set_network_error_message(message);
        self
    }

    pub fn set_network_error_message(&mut self, message: impl AsRef<str>) {
        self.network_error_message = Arc::from(message.as_ref());
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn network_error(&self) -> ApiError {
        ApiError::transport(self.network_error_message.as_ref())
    }

    /// GET `path` and decode the body as `T`
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            self.network_error()
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            warn!("Request to {} returned {}", url, status);
            return Err(ApiError::http(status.as_u16(), reason));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            self.network_error()
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            self.network_error()
        })
    }
}

impl DataSource for ApiClient {
    async fn fetch_users(&self) -> std::result::Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    async fn fetch_user_by_id(&self, id: u32) -> std::result::Result<User, ApiError> {
        self.get_json(&format!("/users/{id}")).await
    }

    async fn fetch_all_posts(&self) -> std::result::Result<Vec<Post>, ApiError> {
        self.get_json("/posts").await
    }

    async fn fetch_posts_by_user(&self, user_id: u32) -> std::result::Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/posts?userId={user_id}")).await
    }
}
