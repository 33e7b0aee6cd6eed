//! "About" card on the dashboard

use cdash_core::I18n;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const FEATURE_KEYS: [&str; 5] = [
    "dashboard.about.features.typing",
    "dashboard.about.features.errorHandling",
    "dashboard.about.features.architecture",
    "dashboard.about.features.responsive",
    "dashboard.about.features.terminal",
];

pub struct AboutCard<'a> {
    i18n: &'a I18n,
}

impl<'a> AboutCard<'a> {
    pub fn new(i18n: &'a I18n) -> Self {
        Self { i18n }
    }
}

impl Widget for AboutCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            format!(" {} ", self.i18n.t("dashboard.about.title")),
            styles::heading(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.i18n.t("dashboard.about.description"),
                styles::text_secondary(),
            )),
            Line::default(),
        ];
        lines.extend(FEATURE_KEYS.iter().map(|key| {
            Line::from(vec![
                Span::styled("  • ", styles::accent()),
                Span::styled(self.i18n.t(key), styles::text_primary()),
            ])
        }));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
