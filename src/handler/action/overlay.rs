//! Overlay action handlers
//!
//! Edits the prompt buffer and carries out the overlay's purpose on commit

use crate::action::file as file_ops;
use crate::core::{AppState, OverlayPurpose};
use crate::handler::key::KeyAction;

use super::file_ops::reload;

/// Handle overlay editing and commit
pub fn handle(action: KeyAction, state: &mut AppState) {
    match action {
        KeyAction::OverlayAppend { text } => {
            if let Some(overlay) = state.overlay.as_mut() {
                overlay.append(&text);
            }
        }
        KeyAction::OverlayBackspace => {
            if let Some(overlay) = state.overlay.as_mut() {
                overlay.backspace();
            }
        }
        KeyAction::OverlayCancel => {
            state.overlay = None;
        }
        KeyAction::OverlayCommit => commit(state),
        _ => {}
    }
}

fn commit(state: &mut AppState) {
    let Some(overlay) = state.overlay.take() else {
        return;
    };
    let confirmed = overlay.is_affirmative();

    match overlay.purpose {
        OverlayPurpose::Rename { original } => {
            let new_name = overlay.buffer;
            if new_name.is_empty() || new_name == original {
                return;
            }
            let from = state.nav.current_path.join(&original);
            match file_ops::rename(&from, &new_name) {
                Ok(_) => {
                    tracing::info!(from = %original, to = %new_name, "renamed");
                    reload(state);
                    state.nav.select_name(&new_name);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rename failed");
                    state.set_message(e.short_message());
                }
            }
        }
        OverlayPurpose::ConfirmDelete { targets } => {
            if !confirmed {
                return;
            }
            let mut deleted = 0;
            let mut last_error = None;
            for path in &targets {
                match file_ops::remove(path) {
                    Ok(()) => deleted += 1,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "delete failed");
                        last_error = Some(e);
                    }
                }
            }
            tracing::info!(deleted, "delete finished");
            state.nav.clear_selection();
            match last_error {
                Some(e) => state.set_message(e.short_message()),
                None => state.set_message(format!("Deleted {} item(s)", deleted)),
            }
            reload(state);
        }
        OverlayPurpose::NewFolder => {
            let name = overlay.buffer.trim();
            if name.is_empty() {
                return;
            }
            match file_ops::create_dir(&state.nav.current_path, name) {
                Ok(path) => {
                    reload(state);
                    if let Some(created) = path.file_name().and_then(|n| n.to_str()) {
                        state.nav.select_name(created);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "create folder failed");
                    state.set_message(e.short_message());
                }
            }
        }
    }
}

