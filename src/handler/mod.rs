//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{handle_action, ActionContext, ActionResult};
pub use key::{handle_key_event, KeyAction};
pub use mouse::handle_mouse_event;

use crate::core::AppState;
use crate::input::InputEvent;
use crate::render::HeaderLayout;

/// Route one decoded event to the overlay or the navigation state.
///
/// The status message from the previous action is dropped first, so a
/// message stays on screen until the next input.
pub fn dispatch(
    event: &InputEvent,
    state: &mut AppState,
    header: &HeaderLayout,
    context: &mut ActionContext<'_>,
) -> ActionResult {
    state.clear_message();
    let action = match event {
        InputEvent::Mouse(mouse) => handle_mouse_event(state, *mouse, header),
        _ => handle_key_event(state, event),
    };
    tracing::debug!(?event, ?action, "dispatch");
    handle_action(action, state, context)
}
