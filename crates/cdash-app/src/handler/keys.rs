//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::PageJump => handle_key_page_jump(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while typing a search query
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    let query = state.page.users().map(|u| u.query()).unwrap_or_default();

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Backspace => {
            let mut text = query.to_string();
            text.pop();
            Some(Message::SearchInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),
        key => key.as_text().map(|c| {
            let mut text = query.to_string();
            text.push(c);
            Message::SearchInput { text }
        }),
    }
}

/// Handle key events while typing a page number
fn handle_key_page_jump(state: &AppState, key: InputKey) -> Option<Message> {
    let users = state.page.users()?;

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelPageJump),
        InputKey::Enter => Some(match users.jump_target() {
            Some(page) => Message::GoToPage(page),
            None => Message::CancelPageJump,
        }),
        InputKey::Backspace => {
            let mut text = users.jump_input().to_string();
            text.pop();
            Some(Message::PageJumpInput { text })
        }
        InputKey::Char(c) if c.is_ascii_digit() => {
            let mut text = users.jump_input().to_string();
            text.push(c);
            Some(Message::PageJumpInput { text })
        }
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('1') => return Some(Message::Navigate(Route::Dashboard)),
        InputKey::Char('2') => return Some(Message::Navigate(Route::Users)),
        InputKey::Char('L') => return Some(Message::ToggleLocale),
        InputKey::Char('r') => return Some(Message::Retry),
        _ => {}
    }

    match &state.page.route {
        Route::Dashboard => None,
        Route::Users => handle_key_users(state, key),
        Route::UserDetail(_) => match key {
            InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::GoBack),
            _ => None,
        },
    }
}

/// Users list bindings
fn handle_key_users(state: &AppState, key: InputKey) -> Option<Message> {
    let has_query = state
        .page
        .users()
        .is_some_and(|users| !users.query().is_empty());

    match key {
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Esc if has_query => Some(Message::CancelSearch),

        InputKey::Left | InputKey::Char('h') | InputKey::PageUp => Some(Message::PrevPage),
        InputKey::Right | InputKey::Char('l') | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Home | InputKey::Char('g') => Some(Message::FirstPage),
        InputKey::End | InputKey::Char('G') => Some(Message::LastPage),
        InputKey::Char('p') => Some(Message::StartPageJump),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),

        _ => None,
    }
}
