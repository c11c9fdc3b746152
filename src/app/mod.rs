//! Application module
//!
//! This module contains the configuration, terminal session and event
//! loop for termdir.

mod config;
mod config_file;
#[cfg(unix)]
mod event_loop;
mod terminal;

pub use config::Config;
pub use config_file::{ConfigFile, GeneralConfig};
#[cfg(unix)]
pub use event_loop::run_app;
pub use terminal::TerminalSession;
