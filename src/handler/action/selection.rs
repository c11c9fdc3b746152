//! Selection action handlers
//!
//! Handles ToggleMark, ToggleSelectAll, ClearMarks, Yank and CopyPath

use crate::action::copy_paths_to_system;
use crate::core::AppState;
use crate::handler::key::KeyAction;

/// Handle selection and clipboard actions
pub fn handle(action: KeyAction, state: &mut AppState) {
    match action {
        KeyAction::ToggleMark => {
            if let Some(name) = state.nav.focused().map(|e| e.name.clone()) {
                state.nav.toggle_selection(&name);
            }
        }
        KeyAction::ToggleSelectAll => state.nav.toggle_select_all(),
        KeyAction::ClearMarks => state.nav.clear_selection(),
        KeyAction::Yank => {
            let targets = state.nav.effective_targets();
            if !targets.is_empty() {
                let count = targets.len();
                state.clipboard.yank(targets);
                state.set_message(format!("Yanked {} item(s)", count));
            }
        }
        KeyAction::CopyPath => {
            let targets = state.nav.effective_targets();
            if targets.is_empty() {
                return;
            }
            let paths: Vec<&std::path::Path> = targets.iter().map(|p| p.as_path()).collect();
            match copy_paths_to_system(&paths) {
                Ok(()) => state.set_message(format!("Copied {} path(s)", targets.len())),
                Err(e) => {
                    tracing::warn!(error = %e, "system clipboard unavailable");
                    state.set_message("Failed: copy path");
                }
            }
        }
        _ => {}
    }
}
