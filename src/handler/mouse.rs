//! Mouse event handling

use crate::core::AppState;
use crate::input::{MouseAction, MouseKind};
use crate::render::HeaderLayout;

use super::key::KeyAction;

/// Map a mouse report (1-based coordinates) to an action.
///
/// `header` must be the layout of the frame currently on screen so the
/// click lands on what the user sees.
pub fn handle_mouse_event(state: &AppState, mouse: MouseAction, header: &HeaderLayout) -> KeyAction {
    match mouse.kind {
        // The wheel scrolls even while an overlay is open
        MouseKind::ScrollUp => KeyAction::MoveUp,
        MouseKind::ScrollDown => KeyAction::MoveDown,
        MouseKind::Click if state.overlay.is_some() => KeyAction::None,
        MouseKind::Click => handle_click(state, mouse, header),
    }
}

fn handle_click(state: &AppState, mouse: MouseAction, header: &HeaderLayout) -> KeyAction {
    match mouse.row {
        0 => KeyAction::None,
        1 => header
            .hit(mouse.column.saturating_sub(1))
            .map(|index| KeyAction::RunTopBar { index })
            .unwrap_or(KeyAction::None),
        row => {
            let list_row = usize::from(row - 2);
            let index = state.nav.scroll_top + list_row;
            if index >= state.nav.entries.len() {
                KeyAction::None
            } else if index == state.nav.cursor {
                // Clicking the cursor row again opens it
                KeyAction::Enter
            } else {
                KeyAction::MoveToRow { row: list_row }
            }
        }
    }
}
