//! Decoded input events

use std::path::PathBuf;

/// Named keys recognised by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Enter,
    Tab,
    Backspace,
    Space,
    Escape,
    /// Function key F1..F12
    F(u8),
    /// Control chord, lowercase letter (`Ctrl('q')` for 0x11)
    Ctrl(char),
}

/// Mouse actions carried by SGR reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Click,
    ScrollUp,
    ScrollDown,
}

/// A mouse press, with the 1-based coordinates from the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseAction {
    pub kind: MouseKind,
    pub column: u16,
    pub row: u16,
}

/// One discrete input event. Produced and consumed within a loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Mouse(MouseAction),
    /// Drag-and-drop delivered a quoted path
    PathDrop(PathBuf),
    /// Printable characters (overlay text or type-ahead prefix)
    Text(String),
}

impl InputEvent {
    /// True for the keys that terminate the program in any mode
    pub fn is_kill(&self) -> bool {
        matches!(self, InputEvent::Key(Key::Ctrl('q')) | InputEvent::Key(Key::Ctrl('c')))
    }
}
