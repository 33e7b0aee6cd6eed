//! Startup: settings, locale and API client from config files and CLI flags

use std::path::PathBuf;
use std::sync::Arc;

use cdash_api::ApiClient;
use cdash_app::config::{self, Settings};
use cdash_app::{AppState, Route, UsersViewSeed};
use cdash_core::prelude::*;
use cdash_core::{I18n, Locale, Translations};

/// Everything the command line can override
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Base URL replacing `api.base_url`
    pub api_url: Option<String>,
    /// Locale for this session only; the stored preference is left alone
    pub locale: Option<Locale>,
    pub page_size: Option<usize>,
    /// Config directory replacing the platform default
    pub config_dir: Option<PathBuf>,
    /// Initial users search query
    pub search: Option<String>,
    /// Initial users page
    pub page: Option<usize>,
    /// Page opened at startup
    pub route: Route,
}

impl LaunchOptions {
    fn resolved_config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone().or_else(config::default_config_dir)
    }

    fn users_seed(&self) -> Option<UsersViewSeed> {
        if self.search.is_none() && self.page.is_none() {
            return None;
        }
        Some(UsersViewSeed {
            query: self.search.clone().unwrap_or_default(),
            page: self.page.unwrap_or(1),
        })
    }
}

/// Effective settings: `config.toml` with CLI overrides on top
pub fn resolve_settings(options: &LaunchOptions) -> Settings {
    let mut settings = match options.resolved_config_dir() {
        Some(dir) => config::load_settings(&dir),
        None => Settings::default(),
    };

    if let Some(url) = &options.api_url {
        settings.api.base_url = url.clone();
    }
    if let Some(page_size) = options.page_size {
        settings.ui.page_size = page_size;
    }
    settings
}

/// Build the initial state and the API client
pub fn prepare(options: &LaunchOptions) -> Result<(AppState, ApiClient)> {
    let config_dir = options.resolved_config_dir();
    let settings = resolve_settings(options);

    let locale = match (options.locale, &config_dir) {
        (Some(locale), _) => locale,
        (None, Some(dir)) => config::load_locale(dir),
        (None, None) => Locale::default(),
    };
    info!("Locale: {}", locale);

    let translations = Arc::new(Translations::embedded()?);
    let i18n = I18n::new(translations, locale);

    let client = ApiClient::new(&settings.api.base_url, settings.api.timeout())?
        .with_network_error_message(i18n.t("common.error.network"));
    info!("API base URL: {}", client.base_url());

    let mut state = AppState::new(i18n, settings);
    if let Some(dir) = config_dir {
        state = state.with_config_dir(dir);
    }
    if let Some(seed) = options.users_seed() {
        state = state.with_users_seed(seed);
    }

    Ok((state, client))
}
