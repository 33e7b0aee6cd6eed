//! Configuration types for Client Dashboard

use std::time::Duration;

use cdash_api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub ui: UiSettings,
}

/// `[api]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root of the users/posts API
    pub base_url: String,
    /// Request timeout in milliseconds; 0 keeps the transport default
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Rows per page on the users list
    pub page_size: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { page_size: 5 }
    }
}

/// Per-user state from `preferences.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Last chosen locale code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
