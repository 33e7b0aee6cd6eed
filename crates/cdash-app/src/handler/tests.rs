//! Tests for the update function, key handling and fetch orchestration

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cdash_api::DataSource;
use cdash_core::types::fixtures;
use cdash_core::{ApiError, I18n, Locale, Post, Translations, User};
use tokio::sync::mpsc;

use super::{update, Task, UpdateAction, UpdateResult};
use crate::actions::execute_task;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::load_state::{FetchTicket, LoadState, PageError};
use crate::message::Message;
use crate::process::process_message;
use crate::route::Route;
use crate::state::{AppState, UiMode};

// ─────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────

/// Request kinds of the fake source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Users,
    UserById,
    AllPosts,
    PostsByUser,
}

/// In-memory data source that counts every request
#[derive(Debug, Clone, Default)]
struct CountingSource {
    calls: Arc<AtomicUsize>,
    users: Vec<User>,
    posts: Vec<Post>,
    fail_with: Option<ApiError>,
    /// Restricts `fail_with` to one endpoint; `None` fails them all
    fail_only: Option<Endpoint>,
}

impl CountingSource {
    fn with_data(users: u32, posts: Vec<Post>) -> Self {
        Self {
            users: fixtures::users(users),
            posts,
            ..Default::default()
        }
    }

    fn failing(error: ApiError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    /// Fail only `endpoint`, answering every other request from the data
    fn failing_on(mut self, endpoint: Endpoint, error: ApiError) -> Self {
        self.fail_with = Some(error);
        self.fail_only = Some(endpoint);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond<T>(&self, endpoint: Endpoint, value: T) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(e) if self.fail_only.map_or(true, |only| only == endpoint) => Err(e.clone()),
            _ => Ok(value),
        }
    }
}

impl DataSource for CountingSource {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.respond(Endpoint::Users, self.users.clone())
    }

    async fn fetch_user_by_id(&self, id: u32) -> Result<User, ApiError> {
        let user = self.users.iter().find(|u| u.id == id).cloned();
        match self.respond(Endpoint::UserById, user)? {
            Some(user) => Ok(user),
            None => Err(ApiError::http(404, "Not Found")),
        }
    }

    async fn fetch_all_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.respond(Endpoint::AllPosts, self.posts.clone())
    }

    async fn fetch_posts_by_user(&self, user_id: u32) -> Result<Vec<Post>, ApiError> {
        let posts = self
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        self.respond(Endpoint::PostsByUser, posts)
    }
}

fn test_state() -> AppState {
    let i18n = I18n::new(Arc::new(Translations::embedded().unwrap()), Locale::En);
    AppState::new(i18n, Settings::default())
}

fn spawned_task(result: &UpdateResult) -> Task {
    match &result.action {
        Some(UpdateAction::SpawnTask(task)) => *task,
        other => panic!("expected a spawned task, got {:?}", other),
    }
}

/// Open the users page and complete its first cycle with `count` users
fn users_loaded(state: &mut AppState, count: u32) {
    let result = update(state, Message::Navigate(Route::Users));
    let ticket = spawned_task(&result).ticket();
    update(
        state,
        Message::UsersLoaded {
            ticket,
            result: Ok(fixtures::users(count)),
        },
    );
}

fn press(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn transport_error() -> PageError {
    PageError::from(ApiError::transport("Network error."))
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_first_navigation_starts_fetch() {
    let mut state = test_state();
    let result = update(&mut state, Message::Navigate(Route::Dashboard));

    assert!(matches!(spawned_task(&result), Task::LoadDashboard { .. }));
    assert!(state.page.is_loading());
}

#[test]
fn test_same_route_does_not_restart() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Users));
    let id = state.page.id;

    let result = update(&mut state, Message::Navigate(Route::Users));
    assert!(result.action.is_none());
    assert_eq!(state.page.id, id);
}

#[test]
fn test_changing_detail_id_creates_new_instance() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::UserDetail("1".into())));
    let first = state.page.id;

    let result = update(&mut state, Message::Navigate(Route::UserDetail("2".into())));
    assert!(matches!(
        spawned_task(&result),
        Task::LoadUserDetail { user_id: 2, .. }
    ));
    assert_ne!(state.page.id, first);
}

#[test]
fn test_invalid_detail_id_fails_without_fetch() {
    let mut state = test_state();
    let result = update(&mut state, Message::Navigate(Route::UserDetail("abc".into())));

    assert!(result.action.is_none());
    let err = state.page.error().unwrap();
    assert_eq!(err.message(), "Invalid user ID.");
    assert_eq!(err.status(), None);
}

#[test]
fn test_go_back_from_detail() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::UserDetail("3".into())));

    let result = update(&mut state, Message::GoBack);
    assert!(matches!(
        result.message,
        Some(Message::Navigate(Route::Users))
    ));
}

#[test]
fn test_go_back_elsewhere_is_ignored() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Users));
    assert!(update(&mut state, Message::GoBack).message.is_none());
}

// ─────────────────────────────────────────────────────────
// Stale Responses and Retry
// ─────────────────────────────────────────────────────────

#[test]
fn test_result_for_previous_instance_is_discarded() {
    let mut state = test_state();
    let old = spawned_task(&update(&mut state, Message::Navigate(Route::UserDetail("1".into()))));
    let new = spawned_task(&update(&mut state, Message::Navigate(Route::UserDetail("2".into()))));

    let stale = crate::page::UserDetail {
        user: fixtures::user(1, "Leanne Graham", "sincere@april.biz", "Romaguera-Crona"),
        posts: vec![],
    };
    update(
        &mut state,
        Message::UserDetailLoaded {
            ticket: old.ticket(),
            result: Ok(stale),
        },
    );
    assert!(state.page.is_loading());

    let fresh = crate::page::UserDetail {
        user: fixtures::user(2, "Ervin Howell", "shanna@melissa.tv", "Deckow-Crist"),
        posts: vec![fixtures::post(11, 2)],
    };
    update(
        &mut state,
        Message::UserDetailLoaded {
            ticket: new.ticket(),
            result: Ok(fresh),
        },
    );
    let loaded = state.page.user_detail().unwrap().load.data().unwrap();
    assert_eq!(loaded.user.id, 2);
}

#[test]
fn test_result_for_other_page_kind_is_discarded() {
    let mut state = test_state();
    let users = spawned_task(&update(&mut state, Message::Navigate(Route::Users)));
    update(&mut state, Message::Navigate(Route::Dashboard));

    update(
        &mut state,
        Message::UsersLoaded {
            ticket: users.ticket(),
            result: Ok(fixtures::users(3)),
        },
    );
    assert!(state.page.is_loading());
    assert!(state.page.dashboard().is_some());
}

#[test]
fn test_retry_after_failure_starts_new_cycle() {
    let mut state = test_state();
    let first = spawned_task(&update(&mut state, Message::Navigate(Route::Users)));
    update(
        &mut state,
        Message::UsersLoaded {
            ticket: first.ticket(),
            result: Err(transport_error()),
        },
    );
    assert!(state.page.error().unwrap().is_retryable());

    let second = spawned_task(&update(&mut state, Message::Retry));
    assert_eq!(
        second.ticket(),
        FetchTicket {
            page: first.ticket().page,
            cycle: 2
        }
    );
    assert!(state.page.is_loading());

    // A late answer from the first cycle cannot overwrite the retry
    update(
        &mut state,
        Message::UsersLoaded {
            ticket: first.ticket(),
            result: Err(transport_error()),
        },
    );
    assert!(state.page.is_loading());
}

#[test]
fn test_retry_while_loading_is_ignored() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Users));
    assert!(update(&mut state, Message::Retry).action.is_none());
}

#[test]
fn test_retry_after_success_reloads() {
    let mut state = test_state();
    users_loaded(&mut state, 3);
    assert!(matches!(
        spawned_task(&update(&mut state, Message::Retry)),
        Task::LoadUsers { .. }
    ));
}

#[test]
fn test_retry_after_validation_failure_is_ignored() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::UserDetail("0".into())));
    let result = update(&mut state, Message::Retry);
    assert!(result.action.is_none());
    assert!(matches!(
        state.page.user_detail().unwrap().load,
        LoadState::Failed(PageError::Validation { .. })
    ));
}

// ─────────────────────────────────────────────────────────
// Locale
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_locale_without_config_dir() {
    let mut state = test_state();
    let result = update(&mut state, Message::ToggleLocale);
    let result = update(&mut state, result.message.unwrap());

    assert_eq!(state.locale(), Locale::De);
    assert!(result.action.is_none());
    assert_eq!(state.i18n.t("nav.users"), "Benutzer");
}

#[test]
fn test_toggle_locale_persists_when_configured() {
    let mut state = test_state().with_config_dir(PathBuf::from("/tmp/cdash-test"));
    let result = update(&mut state, Message::SetLocale(Locale::De));
    assert_eq!(
        result.action,
        Some(UpdateAction::SaveLocale {
            locale: Locale::De,
            config_dir: PathBuf::from("/tmp/cdash-test"),
        })
    );

    // Same locale again writes nothing
    assert!(update(&mut state, Message::SetLocale(Locale::De)).action.is_none());
}

// ─────────────────────────────────────────────────────────
// Users Page
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_typing_filters_and_resets_page() {
    let mut state = test_state();
    users_loaded(&mut state, 12);
    update(&mut state, Message::NextPage);
    assert_eq!(state.page.users().unwrap().current_page(), 2);

    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
    for c in "user 1".chars() {
        press(&mut state, InputKey::Char(c));
    }

    let users = state.page.users().unwrap();
    assert_eq!(users.query(), "user 1");
    assert_eq!(users.current_page(), 1);
    assert_eq!(users.view().filtered_total, 4);
}

#[test]
fn test_search_mode_swallows_shortcuts() {
    let mut state = test_state();
    users_loaded(&mut state, 3);
    press(&mut state, InputKey::Char('/'));
    press(&mut state, InputKey::Char('q'));

    assert!(!state.should_quit());
    assert_eq!(state.page.users().unwrap().query(), "q");
}

#[test]
fn test_search_backspace_and_submit() {
    let mut state = test_state();
    users_loaded(&mut state, 3);
    press(&mut state, InputKey::Char('/'));
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Char('b'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.page.users().unwrap().query(), "a");
}

#[test]
fn test_escape_clears_search() {
    let mut state = test_state();
    users_loaded(&mut state, 3);
    press(&mut state, InputKey::Char('/'));
    press(&mut state, InputKey::Char('x'));
    press(&mut state, InputKey::Esc);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.page.users().unwrap().query(), "");
}

#[test]
fn test_search_not_available_on_dashboard() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Dashboard));
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_arrow_keys_page_and_select() {
    let mut state = test_state();
    users_loaded(&mut state, 12);

    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);

    let users = state.page.users().unwrap();
    assert_eq!(users.current_page(), 2);
    assert_eq!(users.selected_user_id(), Some(8));

    press(&mut state, InputKey::End);
    assert_eq!(state.page.users().unwrap().current_page(), 3);
    press(&mut state, InputKey::Home);
    assert_eq!(state.page.users().unwrap().current_page(), 1);
}

#[test]
fn test_enter_opens_selected_user() {
    let mut state = test_state();
    users_loaded(&mut state, 5);
    update(&mut state, Message::SelectNext);

    let result = update(&mut state, Message::OpenSelected);
    assert!(matches!(
        result.message,
        Some(Message::Navigate(Route::UserDetail(ref id))) if id == "2"
    ));
}

#[test]
fn test_open_selected_on_empty_page_does_nothing() {
    let mut state = test_state();
    users_loaded(&mut state, 0);
    assert!(update(&mut state, Message::OpenSelected).message.is_none());
}

#[test]
fn test_page_jump_goes_to_typed_page() {
    let mut state = test_state();
    users_loaded(&mut state, 50);

    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.ui_mode, UiMode::PageJump);
    press(&mut state, InputKey::Char('1'));
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Char('7'));
    assert_eq!(state.page.users().unwrap().jump_input(), "17");

    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(result.message, Some(Message::GoToPage(17))));
    update(&mut state, result.message.unwrap());

    // 17 is past the last of 10 pages
    let users = state.page.users().unwrap();
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(users.current_page(), 10);
    assert_eq!(users.jump_input(), "");
}

#[test]
fn test_page_jump_swallows_shortcuts_and_cancels() {
    let mut state = test_state();
    users_loaded(&mut state, 12);
    update(&mut state, Message::NextPage);

    press(&mut state, InputKey::Char('p'));
    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Char('3'));
    assert!(!state.should_quit());
    assert_eq!(state.page.users().unwrap().jump_input(), "23");

    press(&mut state, InputKey::Esc);
    let users = state.page.users().unwrap();
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(users.current_page(), 2);
    assert_eq!(users.jump_input(), "");
}

#[test]
fn test_page_jump_enter_without_digits_cancels() {
    let mut state = test_state();
    users_loaded(&mut state, 12);
    press(&mut state, InputKey::Char('p'));

    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(result.message, Some(Message::CancelPageJump)));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_page_jump_needs_more_than_one_page() {
    let mut state = test_state();
    users_loaded(&mut state, 3);
    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_global_keys() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.page.route, Route::Users);

    press(&mut state, InputKey::Char('L'));
    assert_eq!(state.locale(), Locale::De);

    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Fetch Execution
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_task_counts_users_and_posts() {
    let source = CountingSource::with_data(4, vec![fixtures::post(1, 1), fixtures::post(2, 3)]);
    let ticket = FetchTicket { page: 1, cycle: 1 };

    let message = execute_task(Task::LoadDashboard { ticket }, &source).await;
    let Message::DashboardLoaded { result, .. } = message else {
        panic!("unexpected message");
    };
    let stats = result.unwrap();
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.total_posts, 2);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_detail_task_fetches_user_and_posts() {
    let source = CountingSource::with_data(
        3,
        vec![fixtures::post(1, 1), fixtures::post(2, 2), fixtures::post(3, 2)],
    );
    let ticket = FetchTicket { page: 1, cycle: 1 };

    let message = execute_task(Task::LoadUserDetail { ticket, user_id: 2 }, &source).await;
    let Message::UserDetailLoaded { result, .. } = message else {
        panic!("unexpected message");
    };
    let detail = result.unwrap();
    assert_eq!(detail.user.id, 2);
    assert_eq!(detail.posts.len(), 2);
}

#[tokio::test]
async fn test_detail_task_reports_missing_user() {
    let source = CountingSource::with_data(3, vec![]);
    let ticket = FetchTicket { page: 1, cycle: 1 };

    let message = execute_task(Task::LoadUserDetail { ticket, user_id: 99 }, &source).await;
    let Message::UserDetailLoaded { result, .. } = message else {
        panic!("unexpected message");
    };
    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "API Error: Not Found");
}

#[tokio::test]
async fn test_failed_fetch_surfaces_uniform_error() {
    let source = CountingSource::failing(ApiError::http(500, "Internal Server Error"));
    let ticket = FetchTicket { page: 1, cycle: 1 };

    let message = execute_task(Task::LoadDashboard { ticket }, &source).await;
    let Message::DashboardLoaded { result, .. } = message else {
        panic!("unexpected message");
    };
    assert_eq!(result.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_dashboard_fails_when_only_posts_fail() {
    let source = CountingSource::with_data(4, vec![fixtures::post(1, 1)])
        .failing_on(Endpoint::AllPosts, ApiError::http(503, "Service Unavailable"));
    let mut state = test_state();
    let task = spawned_task(&update(&mut state, Message::Navigate(Route::Dashboard)));

    let message = execute_task(task, &source).await;
    assert!(matches!(
        message,
        Message::DashboardLoaded { result: Err(_), .. }
    ));
    update(&mut state, message);

    let page = state.page.dashboard().unwrap();
    assert!(page.load.data().is_none());
    let err = state.page.error().unwrap();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.message(), "API Error: Service Unavailable");
}

#[tokio::test]
async fn test_detail_fails_when_only_posts_fail() {
    let source = CountingSource::with_data(3, vec![fixtures::post(1, 2)])
        .failing_on(Endpoint::PostsByUser, ApiError::transport("Network error."));
    let ticket = FetchTicket { page: 1, cycle: 1 };

    let message = execute_task(Task::LoadUserDetail { ticket, user_id: 2 }, &source).await;
    let Message::UserDetailLoaded { result, .. } = message else {
        panic!("unexpected message");
    };
    let err = result.unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.message(), "Network error.");
}

#[tokio::test]
async fn test_process_message_round_trip() {
    let source = CountingSource::with_data(7, vec![]);
    let (tx, mut rx) = mpsc::channel(8);
    let mut state = test_state();

    process_message(&mut state, Message::Navigate(Route::Users), &tx, &source);
    assert!(state.page.is_loading());

    let reply = rx.recv().await.unwrap();
    process_message(&mut state, reply, &tx, &source);

    let users = state.page.users().unwrap();
    assert_eq!(users.load.data().map(Vec::len), Some(7));
    assert_eq!(users.view().total_pages, 2);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_invalid_id_issues_zero_requests() {
    let source = CountingSource::with_data(3, vec![]);
    let (tx, mut rx) = mpsc::channel(8);
    let mut state = test_state();

    process_message(
        &mut state,
        Message::Navigate(Route::UserDetail("abc".into())),
        &tx,
        &source,
    );
    process_message(&mut state, Message::Retry, &tx, &source);
    tokio::task::yield_now().await;

    assert_eq!(source.calls(), 0);
    assert!(rx.try_recv().is_err());
    assert!(matches!(
        state.page.error(),
        Some(PageError::Validation { .. })
    ));
}
