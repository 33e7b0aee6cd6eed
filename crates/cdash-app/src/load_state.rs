//! Per-page load state and fetch bookkeeping

use cdash_core::ApiError;
use serde::Serialize;

/// Unique id of a page instance, assigned on every navigation
pub type PageId = u64;

/// Identifies one fetch cycle of one page instance
///
/// Results are applied only when their ticket matches the current page
/// instance and its latest cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: PageId,
    pub cycle: u64,
}

/// Failure surfaced by a page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Route input rejected before any request was made
    #[error("{message}")]
    Validation { message: String },

    /// Remote call failed
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl PageError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PageError::Validation { message } => message,
            PageError::Api(e) => &e.message,
        }
    }

    /// HTTP status for failures the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            PageError::Validation { .. } => None,
            PageError::Api(e) => e.status,
        }
    }

    /// Whether re-running the same fetches can help
    pub fn is_retryable(&self) -> bool {
        matches!(self, PageError::Api(_))
    }
}

impl Serialize for PageError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageError::Validation { message } => ApiError::transport(message.clone()),
            PageError::Api(e) => e.clone(),
        }
        .serialize(serializer)
    }
}

/// Tri-state of a page's data plus the initial idle state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(PageError),
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// A new cycle may start unless one is in flight or the page failed
    /// validation
    pub fn can_retry(&self) -> bool {
        match self {
            LoadState::Loading => false,
            LoadState::Failed(e) => e.is_retryable(),
            LoadState::Idle | LoadState::Loaded(_) => true,
        }
    }

    /// Apply the outcome of a fetch cycle
    pub fn finish(&mut self, result: Result<T, PageError>) {
        *self = match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e),
        };
    }
}
