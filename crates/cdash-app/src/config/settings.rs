//! Loading and saving `config.toml` and `preferences.toml`

use std::path::{Path, PathBuf};

use cdash_core::prelude::*;
use cdash_core::Locale;

use super::types::{Settings, UserPreferences};

/// Directory name under the platform config dir
pub const APP_DIR: &str = "client-dashboard";

const CONFIG_FILENAME: &str = "config.toml";
const PREFERENCES_FILENAME: &str = "preferences.toml";

/// `<platform config dir>/client-dashboard`, if the platform has one
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config.toml` in `config_dir`
///
/// A missing file gives defaults; an unreadable or invalid one gives defaults
/// and a warning.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Load `preferences.toml`, `None` when absent or unusable
pub fn load_user_preferences(config_dir: &Path) -> Option<UserPreferences> {
    let prefs_path = config_dir.join(PREFERENCES_FILENAME);

    if !prefs_path.exists() {
        debug!("No preferences file at {:?}", prefs_path);
        return None;
    }

    match std::fs::read_to_string(&prefs_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                warn!("Failed to parse {:?}: {}", prefs_path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", prefs_path, e);
            None
        }
    }
}

/// Write `preferences.toml` atomically (temp file + rename)
pub fn save_user_preferences(config_dir: &Path, prefs: &UserPreferences) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let prefs_path = config_dir.join(PREFERENCES_FILENAME);
    let temp_path = config_dir.join(".preferences.toml.tmp");

    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    std::fs::write(&temp_path, content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &prefs_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved user preferences to {:?}", prefs_path);
    Ok(())
}

/// Persisted locale, or the default when nothing usable is stored
pub fn load_locale(config_dir: &Path) -> Locale {
    let prefs = load_user_preferences(config_dir).unwrap_or_default();
    Locale::from_persisted(prefs.locale.as_deref())
}

/// Persist `locale`, keeping any other preferences already on disk
pub fn save_locale(config_dir: &Path, locale: Locale) -> Result<()> {
    let mut prefs = load_user_preferences(config_dir).unwrap_or_default();
    prefs.locale = Some(locale.code().to_string());
    save_user_preferences(config_dir, &prefs)
}
