//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/termdir/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::TopBarAction;
use crate::error::{Result, TermdirError};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Header buttons. Absent means the built-in defaults.
    pub top_bar: Option<Vec<TopBarAction>>,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// List dotfiles
    pub show_hidden: bool,
    /// Enable Nerd Font icons
    pub icons: bool,
    /// Enable mouse reporting
    pub mouse: bool,
    /// Program that opens files with their default application
    pub opener: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: true,
            icons: true,
            mouse: true,
            opener: default_opener().to_string(),
        }
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/termdir)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("termdir"))
    }

    /// Get the config file path (~/.config/termdir/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TermdirError::config(format!("{}: {}", path.display(), e)))
    }

    /// Configured header buttons, or the defaults
    pub fn top_bar_actions(&self) -> Vec<TopBarAction> {
        self.top_bar.clone().unwrap_or_else(TopBarAction::defaults)
    }
}
