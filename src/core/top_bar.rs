//! Header buttons bound to external commands

use std::path::Path;

use serde::Deserialize;

/// A clickable header label that runs `command args...` in the current folder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopBarAction {
    pub label: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Only shown when the current path contains this text
    #[serde(default)]
    pub when_path_contains: Option<String>,
}

impl TopBarAction {
    pub fn new(label: &str, command: &str, args: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            when_path_contains: None,
        }
    }

    pub fn when_path_contains(mut self, needle: &str) -> Self {
        self.when_path_contains = Some(needle.to_string());
        self
    }

    /// Label to show for `path`, or None when the button is hidden there
    pub fn label_for(&self, path: &Path) -> Option<&str> {
        match &self.when_path_contains {
            Some(needle) if !path.to_string_lossy().contains(needle.as_str()) => None,
            _ => Some(&self.label),
        }
    }

    /// Buttons used when the config file defines none
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("  CODE ", "codium", &["."]).when_path_contains("Coding"),
            Self::new("  GUI ", "xdg-open", &["."]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_predicate() {
        let code = TopBarAction::new("CODE", "codium", &["."]).when_path_contains("Coding");
        assert_eq!(code.label_for(Path::new("/home/me/Coding/app")), Some("CODE"));
        assert_eq!(code.label_for(Path::new("/home/me/Music")), None);

        let gui = TopBarAction::new("GUI", "xdg-open", &["."]);
        assert_eq!(gui.label_for(Path::new("/anywhere")), Some("GUI"));
    }

    #[test]
    fn test_defaults() {
        let defaults = TopBarAction::defaults();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].command, "codium");
        assert_eq!(defaults[1].args, vec!["."]);
    }
}
