//! User detail view: profile cards and the user's posts

use cdash_app::UserDetail;
use cdash_core::{I18n, Post};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Below this width the three info cards stack vertically
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 72;

const CARD_HEIGHT: u16 = 5;

pub struct UserDetailView<'a> {
    i18n: &'a I18n,
    detail: &'a UserDetail,
}

impl<'a> UserDetailView<'a> {
    pub fn new(i18n: &'a I18n, detail: &'a UserDetail) -> Self {
        Self { i18n, detail }
    }

    fn title_lines(&self) -> Vec<Line<'static>> {
        let user = &self.detail.user;
        vec![
            Line::from(vec![
                Span::styled("[Esc] ", styles::keybinding()),
                Span::styled(
                    format!("← {}", self.i18n.t("userDetail.backButton")),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(vec![
                Span::styled(user.name.clone(), styles::heading()),
                Span::styled(format!("  @{}", user.username), styles::text_muted()),
            ]),
        ]
    }

    /// One bordered card with "label: value" rows
    fn render_card(&self, title_key: &str, fields: &[(&str, String)], area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            format!(" {} ", self.i18n.t(title_key)),
            styles::heading(),
        ));
        let lines: Vec<Line> = fields
            .iter()
            .map(|(label_key, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", self.i18n.t(label_key)), styles::text_muted()),
                    Span::styled(value.clone(), styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let user = &self.detail.user;
        let contact = [
            ("userDetail.contact.email", user.email.clone()),
            ("userDetail.contact.phone", user.phone.clone()),
            ("userDetail.contact.website", user.website.clone()),
        ];
        let address = [
            ("userDetail.address.street", user.address.street_line()),
            ("userDetail.address.city", user.address.city_line()),
        ];
        let company = [
            ("userDetail.company.name", user.company.name.clone()),
            ("userDetail.company.slogan", user.company.catch_phrase.clone()),
            ("userDetail.company.business", user.company.bs.clone()),
        ];

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let cards = Layout::default()
            .direction(direction)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        self.render_card("userDetail.contact.title", &contact, cards[0], buf);
        self.render_card("userDetail.address.title", &address, cards[1], buf);
        self.render_card("userDetail.company.title", &company, cards[2], buf);
    }

    fn posts_title(&self) -> String {
        let count = self.detail.posts.len();
        format!(
            " {} {} ({} {}) ",
            self.i18n.t("userDetail.posts.title"),
            self.detail.user.name,
            count,
            self.i18n.t(self.detail.post_count_key())
        )
    }

    fn post_lines(posts: &[Post]) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(posts.len() * 3);
        for post in posts {
            lines.push(Line::from(vec![
                Span::styled("• ", styles::accent()),
                Span::styled(post.title.clone(), styles::heading()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", post.body.replace('\n', " ")),
                styles::text_secondary(),
            )));
            lines.push(Line::default());
        }
        lines
    }

    fn render_posts(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(self.posts_title(), styles::heading()));

        let lines = if self.detail.posts.is_empty() {
            vec![Line::from(Span::styled(
                self.i18n.t("userDetail.posts.empty"),
                styles::text_muted(),
            ))]
        } else {
            Self::post_lines(&self.detail.posts)
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for UserDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards_height = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            CARD_HEIGHT
        } else {
            CARD_HEIGHT * 3
        };

        let [title, cards, posts] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(cards_height),
            Constraint::Min(3),
        ])
        .areas(area);

        Paragraph::new(self.title_lines()).render(title, buf);
        self.render_cards(cards, buf);
        self.render_posts(posts, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_i18n, TestTerminal};
    use cdash_core::types::fixtures::{post, user};
    use cdash_core::Locale;

    fn detail(post_count: u32) -> UserDetail {
        UserDetail {
            user: user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            posts: (1..=post_count).map(|id| post(id, 1)).collect(),
        }
    }

    fn render(detail: &UserDetail, locale: Locale, width: u16, height: u16) -> TestTerminal {
        let i18n = test_i18n(locale);
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(UserDetailView::new(&i18n, detail), Rect::new(0, 0, width, height));
        term
    }

    #[test]
    fn test_shows_profile_sections() {
        let detail = detail(2);
        let term = render(&detail, Locale::En, 120, 30);

        assert!(term.buffer_contains("Back to overview"));
        assert!(term.buffer_contains("Leanne Graham  @leanne"));
        assert!(term.buffer_contains("Contact"));
        assert!(term.buffer_contains("Sincere@april.biz"));
        assert!(term.buffer_contains("Kulas Light, Apt. 556"));
        assert!(term.buffer_contains("92998-3874 Gwenborough"));
        assert!(term.buffer_contains("Romaguera-Crona"));
    }

    #[test]
    fn test_posts_title_uses_plural() {
        let detail = detail(2);
        let term = render(&detail, Locale::En, 120, 30);

        assert!(term.buffer_contains("Posts by Leanne Graham (2 posts)"));
        assert!(term.buffer_contains("Post 1"));
        assert!(term.buffer_contains("Body of post 2"));
    }

    #[test]
    fn test_single_post_uses_singular() {
        let detail = detail(1);
        let term = render(&detail, Locale::De, 120, 30);
        assert!(term.buffer_contains("Beiträge von Leanne Graham (1 Beitrag)"));
    }

    #[test]
    fn test_no_posts_shows_empty_message() {
        let detail = detail(0);
        let term = render(&detail, Locale::En, 120, 30);

        assert!(term.buffer_contains("(0 posts)"));
        assert!(term.buffer_contains("This user has not published any posts yet."));
    }

    #[test]
    fn test_narrow_layout_stacks_cards() {
        let detail = detail(1);
        let term = render(&detail, Locale::En, 60, 40);

        let contact = term.find_line("Contact").expect("contact card");
        let company = term.find_line("Company").expect("company card");
        assert!(company > contact);
    }
}
