//! Main render/view function (View in TEA pattern)


use cdash_app::page::{DashboardPage, UserDetailPage, UsersPage};
use cdash_app::{AppState, LoadState, PageError, UiMode};
use cdash_core::I18n;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;

/// Height of the error panel inside a page
const ERROR_PANEL_HEIGHT: u16 = 7;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::NavHeader::new(&state.i18n, state.page.route.nav_section()),
        areas.header,
    );

    if let Some(page) = state.page.dashboard() {
        render_dashboard(frame, areas.body, state, page);
    } else if let Some(page) = state.page.users() {
        render_users(frame, areas.body, state, page);
    } else if let Some(page) = state.page.user_detail() {
        render_user_detail(frame, areas.body, state, page);
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, page: &DashboardPage) {
    let i18n = &state.i18n;
    let (title, content) = layout::page_sections(area);
    render_page_title(frame, title, i18n, "dashboard.title", "dashboard.subtitle");

    let stats = match &page.load {
        LoadState::Loaded(stats) => stats,
        other => {
            render_unloaded(frame, content, state, other, "dashboard.loading");
            return;
        }
    };

    let [cards, about] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(content);
    let [users, posts, updated] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards);

    frame.render_widget(
        widgets::StatCard::new(i18n.t("dashboard.stats.users"), stats.total_users.to_string()),
        users,
    );
    frame.render_widget(
        widgets::StatCard::new(i18n.t("dashboard.stats.posts"), stats.total_posts.to_string()),
        posts,
    );
    frame.render_widget(
        widgets::StatCard::new(
            i18n.t("dashboard.stats.lastUpdate"),
            stats.formatted_last_update(i18n.locale()),
        ),
        updated,
    );
    frame.render_widget(widgets::AboutCard::new(i18n), about);
}

fn render_users(frame: &mut Frame, area: Rect, state: &AppState, page: &UsersPage) {
    let i18n = &state.i18n;
    let (title, content) = layout::page_sections(area);
    render_page_title(frame, title, i18n, "users.title", "users.subtitle");

    let all_users = match &page.load {
        LoadState::Loaded(users) => users,
        other => {
            render_unloaded(frame, content, state, other, "users.loading");
            return;
        }
    };

    let [search, table, range, pagination] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(content);

    frame.render_widget(
        widgets::SearchInput::new(i18n, page.query(), state.ui_mode == UiMode::SearchInput),
        search,
    );

    let view = page.view();
    if view.filtered_total == 0 {
        // An empty directory and a search without hits read differently
        let key = if all_users.is_empty() {
            "users.empty"
        } else {
            "users.search.noResults"
        };
        render_notice(frame, table, &i18n.t(key));
        return;
    }

    frame.render_widget(
        widgets::UserTable::new(i18n, &view.page_items, page.selected()),
        table,
    );

    if view.range_start > 0 {
        let line = format!(
            "{} {}-{} {} {}",
            i18n.t("users.pagination.showing"),
            view.range_start,
            view.range_end,
            i18n.t("users.pagination.of"),
            view.filtered_total
        );
        frame.render_widget(
            Paragraph::new(Span::styled(line, styles::text_muted())).alignment(Alignment::Center),
            range,
        );
    }

    let window = page.page_window();
    frame.render_widget(
        widgets::Pagination::new(i18n, page.current_page(), view.total_pages, &window)
            .jump_input((state.ui_mode == UiMode::PageJump).then(|| page.jump_input())),
        pagination,
    );
}

fn render_user_detail(frame: &mut Frame, area: Rect, state: &AppState, page: &UserDetailPage) {
    match &page.load {
        LoadState::Loaded(detail) => {
            frame.render_widget(widgets::UserDetailView::new(&state.i18n, detail), area);
        }
        other => render_unloaded(frame, area, state, other, "userDetail.loading"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared Pieces
// ─────────────────────────────────────────────────────────────────────────────

fn render_page_title(frame: &mut Frame, area: Rect, i18n: &I18n, title_key: &str, subtitle_key: &str) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}", i18n.t(title_key)), styles::heading())),
        Line::from(Span::styled(format!(" {}", i18n.t(subtitle_key)), styles::text_muted())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Loading indicator or error panel for a page without data
fn render_unloaded<T>(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    load: &LoadState<T>,
    loading_key: &str,
) {
    match load.error() {
        Some(error) => render_error(frame, area, &state.i18n, error),
        None => frame.render_widget(
            widgets::LoadingIndicator::new(state.i18n.t(loading_key), state.spinner_frame),
            area,
        ),
    }
}

fn render_error(frame: &mut Frame, area: Rect, i18n: &I18n, error: &PageError) {
    let [panel] = Layout::vertical([Constraint::Length(ERROR_PANEL_HEIGHT)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    frame.render_widget(widgets::ErrorPanel::new(error, i18n), panel);
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), styles::text_muted()))
            .alignment(Alignment::Center),
        inner,
    );
}
