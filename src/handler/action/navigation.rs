//! Navigation action handlers
//!
//! Handles cursor movement, enter, parent and type-ahead

use crate::core::{AppState, EnterOutcome};
use crate::handler::key::KeyAction;

use super::ActionContext;

/// Handle navigation actions
pub fn handle(action: KeyAction, state: &mut AppState, context: &mut ActionContext<'_>) {
    let nav = &mut state.nav;
    match action {
        KeyAction::MoveUp => nav.move_cursor(-1),
        KeyAction::MoveDown => nav.move_cursor(1),
        KeyAction::MoveToTop => nav.move_to_first(),
        KeyAction::MoveToBottom => nav.move_to_last(),
        KeyAction::PageUp => nav.page_up(),
        KeyAction::PageDown => nav.page_down(),
        KeyAction::MoveToRow { row } => {
            nav.move_to_row(row);
        }
        KeyAction::TypeAhead { prefix } => {
            nav.type_ahead_jump(&prefix);
        }
        KeyAction::Enter => match nav.enter() {
            Ok(EnterOutcome::Open(path)) => {
                tracing::info!(path = %path.display(), "opening file");
                if let Err(e) = context.launcher.open_with_default_handler(&path) {
                    tracing::warn!(error = %e, "open failed");
                    state.set_message(e.short_message());
                }
            }
            Ok(EnterOutcome::Entered | EnterOutcome::Nothing) => {}
            Err(e) => {
                tracing::warn!(error = %e, "cannot enter directory");
                state.set_message(e.short_message());
            }
        },
        KeyAction::Parent => {
            if let Err(e) = nav.go_to_parent() {
                tracing::warn!(error = %e, "cannot open parent directory");
                state.set_message(e.short_message());
            }
        }
        _ => {}
    }
}
