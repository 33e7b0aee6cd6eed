//! Navigation bar
//!
//! Logo, page links with the active one highlighted, and the language
//! switcher on the right.

use cdash_app::NavSection;
use cdash_core::{I18n, Locale};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct NavHeader<'a> {
    i18n: &'a I18n,
    active: NavSection,
}

impl<'a> NavHeader<'a> {
    pub fn new(i18n: &'a I18n, active: NavSection) -> Self {
        Self { i18n, active }
    }

    fn nav_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.i18n.t("nav.logo"), styles::accent_bold()),
            Span::styled("  │ ", styles::text_muted()),
        ];

        for (index, section) in NavSection::ALL.iter().enumerate() {
            let label = format!(" {} {} ", index + 1, self.i18n.t(section.label_key()));
            let style = if *section == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }

    fn locale_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{}: ", self.i18n.t("nav.language")),
            styles::text_muted(),
        )];

        for (index, locale) in Locale::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", styles::text_muted()));
            }
            let code = locale.code().to_uppercase();
            let style = if *locale == self.i18n.locale() {
                styles::focused_selected()
            } else {
                Style::default().fg(palette::TEXT_SECONDARY)
            };
            spans.push(Span::styled(code, style));
        }
        spans.push(Span::raw(" "));

        Line::from(spans)
    }
}

impl Widget for NavHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };
        Paragraph::new(self.nav_line()).render(row, buf);

        let locale = self.locale_line();
        let locale_width = locale.width() as u16;
        // Drop the switcher before it would overlap the links
        if locale_width + self.nav_line().width() as u16 <= inner.width {
            let right = Rect {
                x: inner.right() - locale_width,
                width: locale_width,
                ..row
            };
            Paragraph::new(locale)
                .alignment(Alignment::Right)
                .render(right, buf);
        }
    }
}
