//! cdash-tui - Terminal UI for Client Dashboard
//!
//! Renders the pages held in `cdash-app` state with ratatui and feeds
//! keyboard input back into the update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
