//! cdash-api - Remote data gateway for Client Dashboard
//!
//! Typed read-only access to the demo REST API. Every operation issues a
//! single request and reduces any failure to [`ApiError`]:
//! - a non-success status becomes `{ message: "API Error: <reason>", status }`
//! - a request that cannot complete becomes `{ message: <network message> }`
//!
//! Nothing is cached and nothing is retried; callers re-invoke.

pub mod client;
pub mod source;

pub use cdash_core::ApiError;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use source::{DataSource, LocalDataSource};
