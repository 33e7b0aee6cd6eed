//! Headless mode - JSON page output without the TUI
//!
//! Loads one route through the same update loop the TUI uses and prints the
//! resulting page as a single JSON document on stdout.
//!
//! # Example Output
//!
//! ```json
//! {"status":"loaded","route":"/users","locale":"de","page":"users","query":"","current_page":1,...}
//! {"status":"failed","route":"/users/abc","locale":"de","error":{"message":"Ungültige Benutzer-ID."}}
//! ```

pub mod runner;

use cdash_app::{AppState, PageError, UserDetail};
use cdash_core::{CollectionView, DashboardStats, PageEntry};
use serde::Serialize;

/// Document printed for one loaded route
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageReport<'a> {
    Loaded {
        route: String,
        locale: &'static str,
        #[serde(flatten)]
        data: PageData<'a>,
    },
    Failed {
        route: String,
        locale: &'static str,
        error: &'a PageError,
    },
    /// The page never finished its fetch cycle
    Pending { route: String, locale: &'static str },
}

/// Page-specific payload of a loaded page
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageData<'a> {
    Dashboard {
        stats: &'a DashboardStats,
    },
    Users {
        query: &'a str,
        current_page: usize,
        page_size: usize,
        view: CollectionView<'a>,
        page_window: Vec<PageEntry>,
    },
    UserDetail {
        detail: &'a UserDetail,
        post_count_label: String,
    },
}

impl PageReport<'_> {
    pub fn is_failed(&self) -> bool {
        matches!(self, PageReport::Failed { .. })
    }
}

/// Describe the current page of `state`
pub fn page_report(state: &AppState) -> PageReport<'_> {
    let route = state.page.route.path();
    let locale = state.locale().code();

    if let Some(error) = state.page.error() {
        return PageReport::Failed {
            route,
            locale,
            error,
        };
    }

    let data = if let Some(page) = state.page.dashboard() {
        page.load.data().map(|stats| PageData::Dashboard { stats })
    } else if let Some(page) = state.page.users() {
        page.load.data().map(|_| PageData::Users {
            query: page.query(),
            current_page: page.current_page(),
            page_size: page.page_size(),
            view: page.view(),
            page_window: page.page_window(),
        })
    } else if let Some(page) = state.page.user_detail() {
        page.load.data().map(|detail| PageData::UserDetail {
            detail,
            post_count_label: state.i18n.t(detail.post_count_key()),
        })
    } else {
        None
    };

    match data {
        Some(data) => PageReport::Loaded {
            route,
            locale,
            data,
        },
        None => PageReport::Pending { route, locale },
    }
}
