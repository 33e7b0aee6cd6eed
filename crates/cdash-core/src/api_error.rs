//! Uniform error shape for remote data failures
//!
//! Every failure that reaches the presentation layer is reduced to a message
//! plus an optional HTTP status. The status is present only when the server
//! answered with a non-success code; transport failures (DNS, refused
//! connection, timeout, unreadable body) carry no status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Network failure message used until a localized one is configured
pub const DEFAULT_NETWORK_ERROR_MESSAGE: &str =
    "Netzwerkfehler. Bitte überprüfen Sie Ihre Internetverbindung.";

/// Error returned by every remote data operation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description, rendered as-is
    pub message: String,

    /// HTTP status code, only for responses with a failure status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    /// Server answered with a non-success status
    pub fn http(status: u16, status_text: impl AsRef<str>) -> Self {
        Self {
            message: format!("API Error: {}", status_text.as_ref()),
            status: Some(status),
        }
    }

    /// Request could not complete
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// True when the server responded with an error status
    pub fn is_http(&self) -> bool {
        self.status.is_some()
    }

    /// True when the server could not be reached at all
    pub fn is_transport(&self) -> bool {
        self.status.is_none()
    }
}
