//! In-app yank buffer and system clipboard access

use std::path::{Path, PathBuf};

/// Paths yanked for a later paste
#[derive(Debug, Default)]
pub struct Clipboard {
    paths: Vec<PathBuf>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Replace the yanked paths
    pub fn yank(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
    }

    /// Yanked paths. Pasting does not clear them, so one yank can be pasted
    /// into several folders.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Put the given paths on the system clipboard, one per line
pub fn copy_paths_to_system(paths: &[&Path]) -> Result<(), arboard::Error> {
    let text = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}
