//! Action module - Filesystem, process launching and clipboard

pub mod clipboard;
pub mod file;
pub mod launcher;

pub use clipboard::{copy_paths_to_system, Clipboard};
pub use file::{copy_to, create_dir, list_directory, remove, rename};
pub use launcher::{Launcher, SystemLauncher};
