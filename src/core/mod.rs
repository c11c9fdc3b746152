//! Core module - Entries, navigation, overlay and application state

pub mod entry;
pub mod mode;
pub mod navigation;
pub mod overlay;
pub mod state;
pub mod top_bar;

pub use entry::{sort_entries, DirEntry, EntryKind};
pub use mode::OverlayPurpose;
pub use navigation::{EnterOutcome, NavigationState};
pub use overlay::Overlay;
pub use state::AppState;
pub use top_bar::TopBarAction;
