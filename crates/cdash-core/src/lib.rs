//! # cdash-core - Core Domain Types
//!
//! Foundation crate for Client Dashboard. Provides domain types, error handling,
//! logging setup, the translation resolver and the collection view engine.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`User`], [`Address`], [`Geo`], [`Company`] - A user record as served by the API
//! - [`Post`] - A post, weakly related to a user through `user_id`
//! - [`DashboardStats`] - Aggregate counts shown on the landing page
//!
//! ### API Errors (`api_error`)
//! - [`ApiError`] - Uniform `{ message, status? }` error shape for remote failures
//!
//! ### Translation (`i18n`)
//! - [`Locale`] - Closed set of display languages
//! - [`Translations`] - Per-locale translation trees with dotted-key lookup
//! - [`I18n`] - Explicit translation context passed to pages and views
//!
//! ### Collection View (`view`)
//! - [`compute_view()`] - Filter and paginate a user collection
//! - [`page_window()`] - Page-selector entries with ellipsis markers
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod api_error;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod types;
pub mod view;

/// Prelude for common imports used throughout all Client Dashboard crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use api_error::ApiError;
pub use error::{Error, Result};
pub use i18n::{I18n, Locale, Translations, DEFAULT_LOCALE};
pub use types::{Address, Company, DashboardStats, Geo, Post, User};
pub use view::{
    compute_view, filter_users, page_window, total_pages, CollectionView, PageEntry,
    PAGE_WINDOW_SIZE,
};
