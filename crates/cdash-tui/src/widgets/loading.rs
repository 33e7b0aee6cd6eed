//! Loading indicator with a page-specific message

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingIndicator {
    message: String,
    frame: usize,
}

impl LoadingIndicator {
    pub fn new(message: impl Into<String>, frame: usize) -> Self {
        Self {
            message: message.into(),
            frame,
        }
    }
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let spinner = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.message, styles::text_secondary()),
        ]);

        // Vertically centered
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
