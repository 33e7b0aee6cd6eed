//! Search field above the users table

use cdash_core::I18n;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct SearchInput<'a> {
    i18n: &'a I18n,
    query: &'a str,
    /// Keystrokes currently go to the field
    active: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(i18n: &'a I18n, query: &'a str, active: bool) -> Self {
        Self {
            i18n,
            query,
            active,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.active);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(" / ", styles::keybinding()),
            Span::styled(
                format!("{}: ", self.i18n.t("users.search.label")),
                styles::text_secondary(),
            ),
        ];

        if self.query.is_empty() && !self.active {
            spans.push(Span::styled(
                self.i18n.t("users.search.placeholder"),
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(self.query.to_string(), styles::text_primary()));
            if self.active {
                spans.push(Span::styled("_", styles::accent_bold()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
