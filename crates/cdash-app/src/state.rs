//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use cdash_core::prelude::*;
use cdash_core::{I18n, Locale};

use crate::config::Settings;
use crate::handler::Task;
use crate::load_state::PageId;
use crate::page::{DashboardPage, Page, PageInstance, UserDetailPage, UsersPage};
use crate::route::Route;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Regular page navigation
    #[default]
    Normal,
    /// Keystrokes go to the users search field
    SearchInput,
    /// Digits go to the users page-number prompt
    PageJump,
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Query and page applied to the first users page that gets opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersViewSeed {
    pub query: String,
    pub page: usize,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Translation context for everything rendered
    pub i18n: I18n,

    pub settings: Settings,

    /// Where locale changes are persisted; `None` keeps them in memory
    pub config_dir: Option<PathBuf>,

    /// Page currently on screen
    pub page: PageInstance,

    pub ui_mode: UiMode,

    pub phase: AppPhase,

    /// Loading indicator frame
    pub spinner_frame: usize,

    users_seed: Option<UsersViewSeed>,

    last_page_id: PageId,
}

impl AppState {
    /// Create state showing an idle dashboard; nothing is fetched until the
    /// first `Navigate`
    pub fn new(i18n: I18n, settings: Settings) -> Self {
        Self {
            i18n,
            settings,
            config_dir: None,
            page: PageInstance::new(0, Route::Dashboard, Page::Dashboard(DashboardPage::default())),
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            spinner_frame: 0,
            users_seed: None,
            last_page_id: 0,
        }
    }

    /// Persist locale changes under `dir`
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Apply a query and page to the first users page opened
    pub fn with_users_seed(mut self, seed: UsersViewSeed) -> Self {
        self.users_seed = Some(seed);
        self
    }

    pub fn locale(&self) -> Locale {
        self.i18n.locale()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    // ─────────────────────────────────────────────────────────
    // Page Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Replace the current page with a fresh instance for `route` and start
    /// its first fetch cycle
    pub fn open(&mut self, route: Route) -> Option<Task> {
        self.last_page_id += 1;
        let page = match &route {
            Route::Dashboard => Page::Dashboard(DashboardPage::default()),
            Route::Users => {
                let mut users = UsersPage::new(self.settings.ui.page_size);
                if let Some(seed) = self.users_seed.take() {
                    users = users.with_view(seed.query, seed.page);
                }
                Page::Users(users)
            }
            Route::UserDetail(raw_id) => Page::UserDetail(UserDetailPage::new(raw_id.clone())),
        };

        info!("Opening {} (page {})", route, self.last_page_id);
        self.page = PageInstance::new(self.last_page_id, route, page);
        self.ui_mode = UiMode::Normal;
        self.page.begin_cycle(&self.i18n)
    }

    /// Start another fetch cycle for the current page if one is allowed
    pub fn retry(&mut self) -> Option<Task> {
        if !self.page.can_retry() {
            debug!("Retry ignored for {}", self.page.route);
            return None;
        }
        info!("Retrying {}", self.page.route);
        self.page.begin_cycle(&self.i18n)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        info!("Locale changed to {}", locale);
        self.i18n.set_locale(locale);
    }

    pub fn tick(&mut self) {
        if self.page.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
