//! Main update function - handles state transitions (TEA pattern)

use cdash_core::prelude::*;
use cdash_core::Locale;

use crate::load_state::{FetchTicket, PageError};
use crate::message::Message;
use crate::page::UsersPage;
use crate::route::Route;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => {
            // Same route keeps the running instance; only the very first
            // navigation starts the idle initial page.
            if state.page.route == route && !state.page.is_idle() {
                return UpdateResult::none();
            }
            UpdateResult::task(state.open(route))
        }

        Message::GoBack => match state.page.route {
            Route::UserDetail(_) => UpdateResult::message(Message::Navigate(Route::Users)),
            _ => UpdateResult::none(),
        },

        Message::Retry => UpdateResult::task(state.retry()),

        // ─────────────────────────────────────────────────────────
        // Locale
        // ─────────────────────────────────────────────────────────
        Message::ToggleLocale => {
            let next = state.locale().next();
            UpdateResult::message(Message::SetLocale(next))
        }

        Message::SetLocale(locale) => handle_set_locale(state, locale),

        // ─────────────────────────────────────────────────────────
        // Users Page
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.page.users().is_some() {
                state.ui_mode = UiMode::SearchInput;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => with_users(state, |users| users.set_query(text)),

        Message::SubmitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.ui_mode = UiMode::Normal;
            with_users(state, |users| users.set_query(""))
        }

        Message::NextPage => with_users(state, UsersPage::next_page),
        Message::PrevPage => with_users(state, UsersPage::prev_page),
        Message::FirstPage => with_users(state, UsersPage::first_page),
        Message::LastPage => with_users(state, UsersPage::last_page),
        Message::GoToPage(page) => {
            if state.ui_mode == UiMode::PageJump {
                state.ui_mode = UiMode::Normal;
            }
            with_users(state, |users| {
                users.set_jump_input("");
                users.go_to_page(page);
            })
        }

        Message::StartPageJump => {
            // Only offered while there is more than one page to pick from
            if state.page.users().is_some_and(|users| users.total_pages() > 1) {
                state.ui_mode = UiMode::PageJump;
                return with_users(state, |users| users.set_jump_input(""));
            }
            UpdateResult::none()
        }

        Message::PageJumpInput { text } => with_users(state, |users| users.set_jump_input(&text)),

        Message::CancelPageJump => {
            state.ui_mode = UiMode::Normal;
            with_users(state, |users| users.set_jump_input(""))
        }
        Message::SelectNext => with_users(state, UsersPage::select_next),
        Message::SelectPrevious => with_users(state, UsersPage::select_previous),

        Message::OpenSelected => match state.page.users().and_then(UsersPage::selected_user_id) {
            Some(id) => UpdateResult::message(Message::Navigate(Route::UserDetail(id.to_string()))),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::DashboardLoaded { ticket, result } => {
            if !accept(state, ticket) {
                return UpdateResult::none();
            }
            if let Some(page) = state.page.dashboard_mut() {
                log_outcome("dashboard", &result);
                page.load.finish(result);
            }
            UpdateResult::none()
        }

        Message::UsersLoaded { ticket, result } => {
            if !accept(state, ticket) {
                return UpdateResult::none();
            }
            if let Some(page) = state.page.users_mut() {
                log_outcome("users", &result);
                page.load.finish(result);
                page.clamp_to_data();
            }
            UpdateResult::none()
        }

        Message::UserDetailLoaded { ticket, result } => {
            if !accept(state, ticket) {
                return UpdateResult::none();
            }
            if let Some(page) = state.page.user_detail_mut() {
                log_outcome("user detail", &result);
                page.load.finish(result);
            }
            UpdateResult::none()
        }
    }
}

fn handle_set_locale(state: &mut AppState, locale: Locale) -> UpdateResult {
    if state.locale() == locale {
        return UpdateResult::none();
    }
    state.set_locale(locale);

    match &state.config_dir {
        Some(dir) => UpdateResult::action(UpdateAction::SaveLocale {
            locale,
            config_dir: dir.clone(),
        }),
        None => UpdateResult::none(),
    }
}

/// Apply `f` to the users page if it is the current page
fn with_users(state: &mut AppState, f: impl FnOnce(&mut UsersPage)) -> UpdateResult {
    if let Some(users) = state.page.users_mut() {
        f(users);
    }
    UpdateResult::none()
}

/// Stale-response guard: only the latest cycle of the current page lands
fn accept(state: &AppState, ticket: FetchTicket) -> bool {
    if state.page.accepts(ticket) {
        true
    } else {
        debug!(
            "Discarding stale result {:?} (current {:?})",
            ticket,
            state.page.ticket()
        );
        false
    }
}

fn log_outcome<T>(what: &str, result: &std::result::Result<T, PageError>) {
    match result {
        Ok(_) => info!("Loaded {}", what),
        Err(e) => warn!("Loading {} failed: {}", what, e),
    }
}
