//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the update logic never depends on a terminal library.

/// A key press as the update logic sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// Character this key contributes to a text field, if any
    pub fn as_text(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}
