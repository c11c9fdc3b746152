//! Render module - Glyphs, header layout and frame rendering

pub mod icons;
pub mod layout;
pub mod view;

pub use icons::glyph_for;
pub use layout::{HeaderButton, HeaderLayout};
pub use view::{fit, header_style, render_frame, Dimensions, Frame};
