//! Application state management

use std::path::PathBuf;

use super::{NavigationState, Overlay};
use crate::action::Clipboard;

/// Main application state, owned by the event loop
#[derive(Debug)]
pub struct AppState {
    /// Current directory, listing, cursor and selection
    pub nav: NavigationState,
    /// Active modal prompt. Intercepts all input while present.
    pub overlay: Option<Overlay>,
    /// Transient status message, cleared by the next input event
    pub message: Option<String>,
    /// Yanked paths for paste
    pub clipboard: Clipboard,
    /// Whether to show Nerd Fonts icons
    pub icons_enabled: bool,
}

impl AppState {
    /// Create state for `path` (not loaded until the first reload)
    pub fn new(path: PathBuf, show_hidden: bool, icons_enabled: bool) -> Self {
        Self {
            nav: NavigationState::new(path, show_hidden),
            overlay: None,
            message: None,
            clipboard: Clipboard::new(),
            icons_enabled,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        tracing::debug!(label = %overlay.label, "overlay opened");
        self.overlay = Some(overlay);
    }
}
