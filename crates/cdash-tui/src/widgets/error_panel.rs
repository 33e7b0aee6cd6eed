//! Error panel with optional retry hint

use cdash_app::PageError;
use cdash_core::I18n;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct ErrorPanel<'a> {
    error: &'a PageError,
    i18n: &'a I18n,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(error: &'a PageError, i18n: &'a I18n) -> Self {
        Self { error, i18n }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .border_style(Style::default().fg(palette::STATUS_RED))
            .title(Span::styled(
                format!(" {} ", self.i18n.t("common.error.title")),
                styles::status_red(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(self.error.message(), styles::text_primary())),
        ];

        // Validation failures cannot be fixed by asking again
        if self.error.is_retryable() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("[r] ", styles::keybinding()),
                Span::styled(self.i18n.t("common.error.retry"), styles::text_secondary()),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
