//! Unified error types for termdir
//!
//! Collaborator layers (filesystem, process launcher, terminal) report
//! failures through [`TermdirError`]. The event loop decides which of them
//! are fatal and which become a status message.

use std::path::PathBuf;

/// Unified error type for termdir operations
#[derive(Debug, thiserror::Error)]
pub enum TermdirError {
    /// I/O errors (directory listing, rename, delete, copy)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path validation errors (bad names, missing parents)
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// External process could not be started
    #[error("Launch error: {program} - {reason}")]
    Launch { program: String, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Terminal control errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Convenience Result type using TermdirError
pub type Result<T> = std::result::Result<T, TermdirError>;

impl TermdirError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Launch error
    pub fn launch(program: impl Into<String>, reason: impl ToString) -> Self {
        Self::Launch {
            program: program.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Short form used in the header status message.
    ///
    /// I/O errors carry the OS description only ("Permission denied"),
    /// which reads better than the full `Display` output in one line.
    pub fn short_message(&self) -> String {
        match self {
            Self::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "No such file or directory".to_string(),
                std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
                std::io::ErrorKind::AlreadyExists => "Already exists".to_string(),
                _ => e.to_string(),
            },
            Self::Path { reason, .. } => reason.clone(),
            Self::Launch { program, reason } => format!("{}: {}", program, reason),
            Self::Config(msg) | Self::Terminal(msg) => msg.clone(),
        }
    }
}
