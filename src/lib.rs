//! Client Dashboard Library
//!
//! A terminal dashboard for the users and posts of a demo REST API.

pub mod headless;
pub mod launch;

pub use launch::{prepare, resolve_settings, LaunchOptions};

use cdash_core::prelude::*;

/// Run the TUI
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    cdash_core::logging::init()?;

    let (state, client) = prepare(&options)?;
    let result = cdash_tui::run(state, client, options.route).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Load one route and print it as JSON
///
/// Returns `false` when the page ended in a failure.
pub async fn run_headless(options: LaunchOptions) -> Result<bool> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    cdash_core::logging::init()?;

    let (state, client) = prepare(&options)?;
    headless::runner::run_headless(state, &client, options.route).await
}
