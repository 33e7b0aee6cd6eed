//! Configuration file handling for Client Dashboard
//!
//! Supports:
//! - `config.toml` - API and UI settings
//! - `preferences.toml` - Persisted locale choice

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, load_locale, load_settings, load_user_preferences, save_locale,
    save_user_preferences, APP_DIR,
};
pub use types::*;
