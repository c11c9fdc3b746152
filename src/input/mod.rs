//! Input module - raw terminal bytes to input events

pub mod decode;
pub mod event;
#[cfg(unix)]
pub mod source;

pub use decode::{decode, READ_BUFFER_SIZE};
pub use event::{InputEvent, Key, MouseAction, MouseKind};
#[cfg(unix)]
pub use source::{InputSource, Wake};
