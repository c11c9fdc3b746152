//! termdir - A full-screen terminal file browser
//!
//! Lists one directory at a time and is driven by raw keyboard and mouse
//! input read straight from the tty.

pub mod action;
pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod input;
pub mod logging;
pub mod render;

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, missing path)
    pub const INVALID: i32 = 3;
}
