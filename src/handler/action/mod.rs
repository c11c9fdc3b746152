//! Action execution handler
//!
//! This module handles the execution of KeyActions, translating them into
//! state changes and collaborator calls. Collaborator failures never stop
//! the loop; they become the header status message.

mod file_ops;
mod navigation;
mod overlay;
mod selection;

use std::path::PathBuf;

use crate::action::Launcher;
use crate::core::{AppState, TopBarAction};
use crate::exit_code;
use crate::handler::key::KeyAction;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
    /// Release the terminal and run a shell in this directory
    Shell(PathBuf),
    /// Repaint the whole screen
    Redraw,
}

/// Collaborators available to actions
pub struct ActionContext<'a> {
    /// Configured header buttons
    pub top_bar: &'a [TopBarAction],
    /// Process launcher for open and top-bar commands
    pub launcher: &'a mut dyn Launcher,
}

/// Handle a KeyAction and update state accordingly
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    context: &mut ActionContext<'_>,
) -> ActionResult {
    match action {
        // No action
        KeyAction::None => ActionResult::Continue,

        // App control
        KeyAction::Quit => ActionResult::Quit(exit_code::SUCCESS),
        KeyAction::OpenShell => ActionResult::Shell(state.nav.current_path.clone()),
        KeyAction::Redraw => ActionResult::Redraw,

        // Navigation
        KeyAction::MoveUp
        | KeyAction::MoveDown
        | KeyAction::MoveToTop
        | KeyAction::MoveToBottom
        | KeyAction::PageUp
        | KeyAction::PageDown
        | KeyAction::MoveToRow { .. }
        | KeyAction::Enter
        | KeyAction::Parent
        | KeyAction::TypeAhead { .. } => {
            navigation::handle(action, state, context);
            ActionResult::Continue
        }

        // Selection and clipboard
        KeyAction::ToggleMark
        | KeyAction::ToggleSelectAll
        | KeyAction::ClearMarks
        | KeyAction::Yank
        | KeyAction::CopyPath => {
            selection::handle(action, state);
            ActionResult::Continue
        }

        // File operations
        KeyAction::Paste
        | KeyAction::ConfirmDelete
        | KeyAction::StartRename
        | KeyAction::StartNewDir
        | KeyAction::DropPath { .. }
        | KeyAction::RunTopBar { .. } => {
            file_ops::handle(action, state, context);
            ActionResult::Continue
        }

        // Overlay editing
        KeyAction::OverlayAppend { .. }
        | KeyAction::OverlayBackspace
        | KeyAction::OverlayCommit
        | KeyAction::OverlayCancel => {
            overlay::handle(action, state);
            ActionResult::Continue
        }
    }
}
