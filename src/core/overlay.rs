//! Modal single-line prompt

use std::path::PathBuf;

use super::OverlayPurpose;

/// An active prompt. While one exists it receives all input.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub label: String,
    pub buffer: String,
    pub purpose: OverlayPurpose,
}

impl Overlay {
    pub fn open(label: impl Into<String>, initial: impl Into<String>, purpose: OverlayPurpose) -> Self {
        Self {
            label: label.into(),
            buffer: initial.into(),
            purpose,
        }
    }

    /// Rename prompt, pre-filled with the current name
    pub fn rename(original: &str) -> Self {
        Self::open(
            "Rename",
            original,
            OverlayPurpose::Rename {
                original: original.to_string(),
            },
        )
    }

    /// Delete confirmation naming a single target or counting several
    pub fn confirm_delete(targets: Vec<PathBuf>) -> Self {
        let label = match targets.as_slice() {
            [single] => format!(
                "Do you want to delete {}? [y,N]",
                single
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| single.display().to_string())
            ),
            many => format!("Do you want to delete {} files? [y,N]", many.len()),
        };
        Self::open(label, "", OverlayPurpose::ConfirmDelete { targets })
    }

    pub fn new_folder() -> Self {
        Self::open("New folder", "", OverlayPurpose::NewFolder)
    }

    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// `<label>: <buffer>`
    pub fn prompt(&self) -> String {
        format!("{}: {}", self.label, self.buffer)
    }

    /// Whether the buffer answers a yes/no question with yes
    pub fn is_affirmative(&self) -> bool {
        self.buffer.trim().eq_ignore_ascii_case("y")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_delete_label_single() {
        let overlay = Overlay::confirm_delete(vec![PathBuf::from("/tmp/dir/b.txt")]);
        assert_eq!(overlay.label, "Do you want to delete b.txt? [y,N]");
        assert!(overlay.buffer.is_empty());
    }

    #[test]
    fn test_confirm_delete_label_many() {
        let overlay =
            Overlay::confirm_delete(vec![PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")]);
        assert_eq!(overlay.label, "Do you want to delete 2 files? [y,N]");
    }

    #[test]
    fn test_buffer_editing() {
        let mut overlay = Overlay::rename("notes.md");
        overlay.backspace();
        overlay.backspace();
        overlay.append("txt");
        assert_eq!(overlay.buffer, "notes.txt");
        assert_eq!(overlay.prompt(), "Rename: notes.txt");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut overlay = Overlay::new_folder();
        overlay.backspace();
        assert_eq!(overlay.buffer, "");
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut overlay = Overlay::new_folder();
        overlay.append("né");
        overlay.backspace();
        assert_eq!(overlay.buffer, "n");
    }

    #[test]
    fn test_is_affirmative() {
        let mut overlay = Overlay::confirm_delete(vec![PathBuf::from("/x")]);
        assert!(!overlay.is_affirmative());
        overlay.append("Y ");
        assert!(overlay.is_affirmative());
        overlay.buffer = "yes".to_string();
        assert!(!overlay.is_affirmative());
    }
}
