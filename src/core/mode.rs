//! Overlay purposes

use std::path::PathBuf;

/// What committing the overlay does with its buffer
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayPurpose {
    /// Rename an entry of the current directory
    Rename { original: String },
    /// Delete the listed paths when the answer is `y`
    ConfirmDelete { targets: Vec<PathBuf> },
    /// Create a directory in the current directory
    NewFolder,
}
