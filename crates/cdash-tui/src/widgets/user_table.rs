//! Users table for the current page of the collection view

use cdash_core::{I18n, User};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use crate::theme::styles;

const COLUMN_KEYS: [&str; 4] = [
    "users.table.name",
    "users.table.email",
    "users.table.company",
    "users.table.city",
];

pub struct UserTable<'a> {
    i18n: &'a I18n,
    users: &'a [&'a User],
    /// Highlighted row within `users`
    selected: usize,
}

impl<'a> UserTable<'a> {
    pub fn new(i18n: &'a I18n, users: &'a [&'a User], selected: usize) -> Self {
        Self {
            i18n,
            users,
            selected,
        }
    }

    fn row(user: &User, selected: bool) -> Row<'static> {
        let name = Line::from(vec![
            Span::raw(user.name.clone()),
            Span::styled(format!(" @{}", user.username), styles::text_muted()),
        ]);
        let row = Row::new(vec![
            Cell::from(name),
            Cell::from(user.email.clone()),
            Cell::from(user.company.name.clone()),
            Cell::from(user.address.city.clone()),
        ]);

        if selected {
            row.style(styles::focused_selected())
        } else {
            row.style(styles::text_primary())
        }
    }
}

impl Widget for UserTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);

        let header = Row::new(COLUMN_KEYS.iter().map(|key| Cell::from(self.i18n.t(key))))
            .style(styles::heading())
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .users
            .iter()
            .enumerate()
            .map(|(index, user)| Self::row(user, index == self.selected))
            .collect();

        let widths = [
            Constraint::Percentage(32),
            Constraint::Percentage(30),
            Constraint::Percentage(22),
            Constraint::Percentage(16),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_i18n, TestTerminal};
    use cdash_core::types::fixtures::user;
    use cdash_core::Locale;
    use ratatui::style::Modifier;

    fn sample() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
        ]
    }

    #[test]
    fn test_renders_translated_header_and_rows() {
        let i18n = test_i18n(Locale::De);
        let users = sample();
        let refs: Vec<&User> = users.iter().collect();
        let mut term = TestTerminal::with_size(120, 10);
        term.render_widget(UserTable::new(&i18n, &refs, 0), Rect::new(0, 0, 120, 10));

        assert!(term.buffer_contains("E-Mail"));
        assert!(term.buffer_contains("Firma"));
        assert!(term.buffer_contains("Leanne Graham"));
        assert!(term.buffer_contains("Shanna@melissa.tv"));
        assert!(term.buffer_contains("Deckow-Crist"));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let i18n = test_i18n(Locale::En);
        let users = sample();
        let refs: Vec<&User> = users.iter().collect();
        let mut term = TestTerminal::with_size(120, 10);
        term.render_widget(UserTable::new(&i18n, &refs, 1), Rect::new(0, 0, 120, 10));

        let row = term.find_line("Ervin Howell").expect("row rendered");
        let buf = term.buffer();
        let cell = (0..120u16)
            .map(|x| &buf[(x, row)])
            .find(|cell| cell.symbol() == "E")
            .expect("name cell");
        assert!(cell.modifier.contains(Modifier::BOLD));

        let other = term.find_line("Leanne Graham").expect("row rendered");
        assert!(!buf[(2, other)].modifier.contains(Modifier::BOLD));
    }
}
