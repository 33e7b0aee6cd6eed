//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border + nav row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Single row of key hints
const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar with logo, page links and locale switcher
    pub header: Rect,
    /// Current page
    pub body: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Title block at the top of a page and the content below it
pub fn page_sections(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);
    (chunks[0], chunks[1])
}
