//! File operation action handlers
//!
//! Handles Paste, ConfirmDelete, StartRename, StartNewDir, DropPath and RunTopBar

use crate::action::file as file_ops;
use crate::core::{AppState, Overlay};
use crate::handler::key::KeyAction;

use super::ActionContext;

/// Handle file operations
pub fn handle(action: KeyAction, state: &mut AppState, context: &mut ActionContext<'_>) {
    match action {
        KeyAction::Paste => {
            if state.clipboard.is_empty() {
                state.set_message("Nothing yanked");
                return;
            }
            let dest = state.nav.current_path.clone();
            let mut pasted = 0;
            let mut last_error = None;
            for src in state.clipboard.paths() {
                match file_ops::copy_to(src, &dest) {
                    Ok(_) => pasted += 1,
                    Err(e) => {
                        tracing::warn!(src = %src.display(), error = %e, "paste failed");
                        last_error = Some(e);
                    }
                }
            }
            match last_error {
                Some(e) => state.set_message(e.short_message()),
                None => state.set_message(format!("Pasted {} item(s)", pasted)),
            }
            reload(state);
        }
        KeyAction::ConfirmDelete => {
            let targets = state.nav.effective_targets();
            if !targets.is_empty() {
                state.open_overlay(Overlay::confirm_delete(targets));
            }
        }
        KeyAction::StartRename => {
            if let Some(name) = state.nav.focused().map(|e| e.name.clone()) {
                state.open_overlay(Overlay::rename(&name));
            }
        }
        KeyAction::StartNewDir => state.open_overlay(Overlay::new_folder()),
        KeyAction::DropPath { path } => {
            // Dropped files are best effort: failures are only logged
            match file_ops::copy_to(&path, &state.nav.current_path) {
                Ok(dest) => tracing::info!(src = %path.display(), dest = %dest.display(), "copied dropped path"),
                Err(e) => tracing::warn!(src = %path.display(), error = %e, "drop copy failed"),
            }
            reload(state);
        }
        KeyAction::RunTopBar { index } => {
            let Some(button) = context.top_bar.get(index) else {
                return;
            };
            tracing::info!(label = %button.label.trim(), command = %button.command, "top-bar action");
            if let Err(e) =
                context
                    .launcher
                    .spawn_detached(&button.command, &button.args, &state.nav.current_path)
            {
                tracing::warn!(error = %e, "top-bar command failed");
                state.set_message(e.short_message());
            }
        }
        _ => {}
    }
}

/// Re-read the current directory after a mutation
pub(super) fn reload(state: &mut AppState) {
    if let Err(e) = state.nav.reload() {
        state.set_message(e.short_message());
    }
}
