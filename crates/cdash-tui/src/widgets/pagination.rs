//! Page selector below the users table

use cdash_core::{I18n, PageEntry};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Pagination<'a> {
    i18n: &'a I18n,
    current_page: usize,
    total_pages: usize,
    window: &'a [PageEntry],
    /// Digits typed so far while the page-number prompt is open
    jump_input: Option<&'a str>,
}

impl<'a> Pagination<'a> {
    pub fn new(
        i18n: &'a I18n,
        current_page: usize,
        total_pages: usize,
        window: &'a [PageEntry],
    ) -> Self {
        Self {
            i18n,
            current_page,
            total_pages,
            window,
            jump_input: None,
        }
    }

    /// Show the page-number prompt after the selector
    pub fn jump_input(mut self, input: Option<&'a str>) -> Self {
        self.jump_input = input;
        self
    }

    fn line(&self) -> Line<'static> {
        let at_start = self.current_page <= 1;
        let at_end = self.current_page >= self.total_pages;

        let edge_style = |disabled: bool| {
            if disabled {
                styles::text_muted()
            } else {
                styles::accent()
            }
        };

        let mut spans = vec![
            Span::styled(
                format!("‹ {}", self.i18n.t("users.pagination.previous")),
                edge_style(at_start),
            ),
            Span::raw("  "),
        ];

        for entry in self.window {
            let style = match entry {
                PageEntry::Page(n) if *n == self.current_page => styles::focused_selected(),
                PageEntry::Page(_) => styles::text_secondary(),
                PageEntry::Ellipsis => styles::text_muted(),
            };
            spans.push(Span::styled(format!(" {} ", entry), style));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} ›", self.i18n.t("users.pagination.next")),
            edge_style(at_end),
        ));

        if let Some(input) = self.jump_input {
            spans.push(Span::styled(
                format!("   {}: ", self.i18n.t("users.pagination.goTo")),
                styles::text_secondary(),
            ));
            spans.push(Span::styled(input.to_string(), styles::text_primary()));
            spans.push(Span::styled("_", styles::accent_bold()));
        }

        Line::from(spans)
    }
}

impl Widget for Pagination<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nothing to choose between
        if self.total_pages <= 1 {
            return;
        }
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
