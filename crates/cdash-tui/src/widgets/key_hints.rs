//! Footer line listing the keys that do something right now

use cdash_app::{AppState, Route, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, translation key)` pairs for the current page and mode
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::SearchInput => {
                return vec![("Enter", "common.keys.search"), ("Esc", "common.keys.back")];
            }
            UiMode::PageJump => {
                return vec![
                    ("0-9", "users.pagination.goTo"),
                    ("Enter", "common.keys.open"),
                    ("Esc", "common.keys.back"),
                ];
            }
            UiMode::Normal => {}
        }

        let mut hints = vec![("1/2", "common.keys.pages")];
        match self.state.page.route {
            Route::Dashboard => {}
            Route::Users => {
                hints.push(("/", "common.keys.search"));
                hints.push(("↑↓", "common.keys.navigate"));
                hints.push(("←→", "common.keys.pages"));
                hints.push(("p", "users.pagination.goTo"));
                hints.push(("Enter", "common.keys.open"));
            }
            Route::UserDetail(_) => hints.push(("Esc", "common.keys.back")),
        }
        if self.state.page.error().is_some() && self.state.page.can_retry() {
            hints.push(("r", "common.keys.retry"));
        }
        hints.push(("L", "common.keys.language"));
        hints.push(("q", "common.keys.quit"));
        hints
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let i18n = &self.state.i18n;
        let mut spans = vec![Span::raw(" ")];
        for (key, label_key) in self.hints() {
            spans.push(Span::styled(format!("[{key}] "), styles::keybinding()));
            spans.push(Span::styled(i18n.t(label_key), styles::text_muted()));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
