//! Message types for the application (TEA pattern)

use cdash_core::{DashboardStats, Locale, User};

use crate::input_key::InputKey;
use crate::load_state::{FetchTicket, PageError};
use crate::page::UserDetail;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick for the loading indicator
    Tick,

    /// Leave the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Open a route; a different route starts a new page instance
    Navigate(Route),
    /// Leave the detail page for the users list
    GoBack,
    /// Re-run the current page's fetches
    Retry,

    // ─────────────────────────────────────────────────────────
    // Locale
    // ─────────────────────────────────────────────────────────
    /// Switch to the next locale and persist the choice
    ToggleLocale,
    /// Switch to a specific locale and persist the choice
    SetLocale(Locale),

    // ─────────────────────────────────────────────────────────
    // Users Page
    // ─────────────────────────────────────────────────────────
    /// Focus the search field
    StartSearch,
    /// Replace the search query (live while typing)
    SearchInput { text: String },
    /// Leave the search field keeping the query
    SubmitSearch,
    /// Leave the search field and clear the query
    CancelSearch,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Jump straight to a page number; closes the page-number prompt
    GoToPage(usize),
    /// Open the page-number prompt
    StartPageJump,
    /// Replace the page-number prompt's digits
    PageJumpInput { text: String },
    /// Close the page-number prompt without moving
    CancelPageJump,
    SelectNext,
    SelectPrevious,
    /// Open the detail page of the highlighted user
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    DashboardLoaded {
        ticket: FetchTicket,
        result: Result<DashboardStats, PageError>,
    },
    UsersLoaded {
        ticket: FetchTicket,
        result: Result<Vec<User>, PageError>,
    },
    UserDetailLoaded {
        ticket: FetchTicket,
        result: Result<UserDetail, PageError>,
    },
}
