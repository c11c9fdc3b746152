//! Keyboard and text event handling

use std::path::PathBuf;

use crate::core::AppState;
use crate::input::{InputEvent, Key};

/// Actions that can result from input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move cursor up
    MoveUp,
    /// Move cursor down
    MoveDown,
    /// Move to first entry
    MoveToTop,
    /// Move to last entry
    MoveToBottom,
    /// Move up by a screenful
    PageUp,
    /// Move down by a screenful
    PageDown,
    /// Move the cursor to a list row (0-based, relative to the scroll offset)
    MoveToRow { row: usize },
    /// Enter directory or open file under the cursor
    Enter,
    /// Go to the parent directory
    Parent,
    /// Jump to the next entry starting with the prefix
    TypeAhead { prefix: String },
    /// Toggle selection of the entry under the cursor
    ToggleMark,
    /// Select all, or clear when everything is selected
    ToggleSelectAll,
    /// Clear the selection
    ClearMarks,
    /// Open the delete confirmation overlay
    ConfirmDelete,
    /// Open the rename overlay
    StartRename,
    /// Open the new folder overlay
    StartNewDir,
    /// Remember the targets for a later paste
    Yank,
    /// Copy yanked paths into the current directory
    Paste,
    /// Copy target paths to the system clipboard
    CopyPath,
    /// Copy a dropped path into the current directory
    DropPath { path: PathBuf },
    /// Run a configured top-bar command
    RunTopBar { index: usize },
    /// Suspend the UI and run a shell in the current directory
    OpenShell,
    /// Repaint the whole screen
    Redraw,
    /// Append text to the overlay buffer
    OverlayAppend { text: String },
    /// Remove the last character of the overlay buffer
    OverlayBackspace,
    /// Commit the overlay
    OverlayCommit,
    /// Close the overlay without committing
    OverlayCancel,
}

/// Map a non-mouse input event to an action
pub fn handle_key_event(state: &AppState, event: &InputEvent) -> KeyAction {
    if event.is_kill() {
        return KeyAction::Quit;
    }
    if state.overlay.is_some() {
        handle_overlay_mode(event)
    } else {
        handle_browse_mode(event)
    }
}

/// While an overlay is open only buffer editing reaches it
fn handle_overlay_mode(event: &InputEvent) -> KeyAction {
    match event {
        InputEvent::Key(Key::Enter) => KeyAction::OverlayCommit,
        InputEvent::Key(Key::Backspace) => KeyAction::OverlayBackspace,
        InputEvent::Key(Key::Escape) => KeyAction::OverlayCancel,
        InputEvent::Key(Key::Space) => KeyAction::OverlayAppend {
            text: " ".to_string(),
        },
        InputEvent::Text(text) => KeyAction::OverlayAppend { text: text.clone() },
        InputEvent::PathDrop(path) => KeyAction::OverlayAppend {
            text: path.display().to_string(),
        },
        _ => KeyAction::None,
    }
}

fn handle_browse_mode(event: &InputEvent) -> KeyAction {
    let key = match event {
        InputEvent::Key(key) => *key,
        InputEvent::Text(text) => {
            return KeyAction::TypeAhead {
                prefix: text.clone(),
            }
        }
        InputEvent::PathDrop(path) => return KeyAction::DropPath { path: path.clone() },
        InputEvent::Mouse(_) => return KeyAction::None,
    };

    match key {
        // Navigation
        Key::Up => KeyAction::MoveUp,
        Key::Down => KeyAction::MoveDown,
        Key::Home => KeyAction::MoveToTop,
        Key::End => KeyAction::MoveToBottom,
        Key::PageUp => KeyAction::PageUp,
        Key::PageDown => KeyAction::PageDown,
        Key::Right | Key::Enter => KeyAction::Enter,
        Key::Left | Key::Backspace => KeyAction::Parent,

        // Selection
        Key::Space => KeyAction::ToggleMark,
        Key::Ctrl('a') => KeyAction::ToggleSelectAll,
        Key::Escape => KeyAction::ClearMarks,

        // File operations
        Key::Delete | Key::Ctrl('d') => KeyAction::ConfirmDelete,
        Key::F(2) | Key::Ctrl('r') => KeyAction::StartRename,
        Key::Ctrl('n') => KeyAction::StartNewDir,
        Key::Ctrl('y') => KeyAction::Yank,
        Key::Ctrl('v') => KeyAction::Paste,
        Key::Ctrl('k') => KeyAction::CopyPath,

        // Terminal
        Key::Ctrl('t') => KeyAction::OpenShell,
        Key::Ctrl('l') => KeyAction::Redraw,

        _ => KeyAction::None,
    }
}
