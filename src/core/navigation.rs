//! Directory navigation state
//!
//! Owns the current path, its listing, the cursor, the scroll offset and
//! the multi-selection. After every mutation the cursor is clamped to the
//! listing and the scroll offset keeps the cursor on screen.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::DirEntry;
use crate::action::file::list_directory;
use crate::error::Result;

/// What `enter()` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Moved into a subdirectory
    Entered,
    /// The cursor is on a file that should be opened
    Open(PathBuf),
    /// Empty listing
    Nothing,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current_path: PathBuf,
    pub entries: Vec<DirEntry>,
    pub cursor: usize,
    pub scroll_top: usize,
    /// Selected names within `current_path`
    pub selection: BTreeSet<String>,
    pub show_hidden: bool,
    /// Rows available for entries (terminal rows minus the header)
    list_rows: usize,
}

impl NavigationState {
    /// State for `path` with nothing loaded yet
    pub fn new(path: impl Into<PathBuf>, show_hidden: bool) -> Self {
        Self {
            current_path: path.into(),
            entries: Vec::new(),
            cursor: 0,
            scroll_top: 0,
            selection: BTreeSet::new(),
            show_hidden,
            list_rows: 1,
        }
    }

    /// Load `path` and start there
    pub fn open(path: impl Into<PathBuf>, show_hidden: bool) -> Result<Self> {
        let mut nav = Self::new(path, show_hidden);
        nav.reload()?;
        Ok(nav)
    }

    pub fn list_rows(&self) -> usize {
        self.list_rows
    }

    /// Update the number of visible entry rows (after a resize)
    pub fn set_list_rows(&mut self, rows: usize) {
        self.list_rows = rows.max(1);
        self.follow_cursor();
    }

    pub fn focused(&self) -> Option<&DirEntry> {
        self.entries.get(self.cursor)
    }

    pub fn focused_path(&self) -> Option<PathBuf> {
        self.focused().map(|e| self.current_path.join(&e.name))
    }

    /// Move by `delta` rows, clamped to the listing
    pub fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.follow_cursor();
    }

    pub fn move_to_first(&mut self) {
        self.cursor = 0;
        self.follow_cursor();
    }

    pub fn move_to_last(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
        self.follow_cursor();
    }

    pub fn page_up(&mut self) {
        self.move_cursor(-(self.list_rows as isize));
    }

    pub fn page_down(&mut self) {
        self.move_cursor(self.list_rows as isize);
    }

    /// Put the cursor on the entry at screen row `row` of the list
    /// (0-based). Returns false when the row is past the last entry.
    pub fn move_to_row(&mut self, row: usize) -> bool {
        let index = self.scroll_top + row;
        if index >= self.entries.len() {
            return false;
        }
        self.cursor = index;
        self.follow_cursor();
        true
    }

    /// Put the cursor on `name` if it is listed
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name == name) {
            Some(index) => {
                self.cursor = index;
                self.follow_cursor();
                true
            }
            None => false,
        }
    }

    /// Descend into the directory under the cursor, or report the file to open.
    ///
    /// An unreadable directory leaves the state untouched and returns the error.
    pub fn enter(&mut self) -> Result<EnterOutcome> {
        let Some(entry) = self.focused() else {
            return Ok(EnterOutcome::Nothing);
        };
        let target = self.current_path.join(&entry.name);
        if !entry.is_dir() {
            return Ok(EnterOutcome::Open(target));
        }
        self.change_dir(target)?;
        Ok(EnterOutcome::Entered)
    }

    /// Go up one level. No-op at the filesystem root.
    pub fn go_to_parent(&mut self) -> Result<()> {
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.change_dir(parent)
    }

    /// Switch to `path`, listing it first so a failure changes nothing
    pub fn change_dir(&mut self, path: PathBuf) -> Result<()> {
        let entries = list_directory(&path, self.show_hidden)?;
        tracing::debug!(path = %path.display(), count = entries.len(), "changed directory");
        self.current_path = path;
        self.entries = entries;
        self.cursor = 0;
        self.scroll_top = 0;
        self.selection.clear();
        Ok(())
    }

    /// Re-read `current_path`.
    ///
    /// If the directory has disappeared, the nearest existing ancestor is
    /// opened instead. Other failures empty the listing and are returned.
    pub fn reload(&mut self) -> Result<()> {
        match list_directory(&self.current_path, self.show_hidden) {
            Ok(entries) => {
                self.replace_entries(entries);
                Ok(())
            }
            Err(err) if !self.current_path.is_dir() => {
                let mut ancestor = self.current_path.clone();
                while !ancestor.is_dir() && ancestor.pop() {}
                tracing::info!(
                    gone = %self.current_path.display(),
                    now = %ancestor.display(),
                    "directory vanished"
                );
                if ancestor.as_os_str().is_empty() || ancestor == self.current_path {
                    self.replace_entries(Vec::new());
                    return Err(err);
                }
                self.change_dir(ancestor)
            }
            Err(err) => {
                self.replace_entries(Vec::new());
                Err(err)
            }
        }
    }

    fn replace_entries(&mut self, entries: Vec<DirEntry>) {
        self.entries = entries;
        let entries = &self.entries;
        self.selection
            .retain(|name| entries.iter().any(|e| &e.name == name));
        self.clamp();
    }

    pub fn toggle_selection(&mut self, name: &str) {
        if !self.selection.remove(name) {
            self.selection.insert(name.to_string());
        }
    }

    /// Select every entry, or clear when all are already selected
    pub fn toggle_select_all(&mut self) {
        if !self.entries.is_empty() && self.selection.len() == self.entries.len() {
            self.selection.clear();
        } else {
            self.selection = self.entries.iter().map(|e| e.name.clone()).collect();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Jump to the next entry after the cursor whose name starts with
    /// `prefix` (case-insensitive), wrapping around. Returns false if none.
    pub fn type_ahead_jump(&mut self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        let len = self.entries.len();
        let found = (1..=len)
            .map(|step| (self.cursor + step) % len)
            .find(|&i| self.entries[i].name.to_lowercase().starts_with(&prefix));
        match found {
            Some(index) => {
                self.cursor = index;
                self.follow_cursor();
                true
            }
            None => false,
        }
    }

    /// Selection if non-empty, otherwise the entry under the cursor
    pub fn effective_targets(&self) -> Vec<PathBuf> {
        if self.selection.is_empty() {
            self.focused_path().into_iter().collect()
        } else {
            self.selection
                .iter()
                .map(|name| self.current_path.join(name))
                .collect()
        }
    }

    fn clamp(&mut self) {
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        self.follow_cursor();
    }

    /// Keep `scroll_top <= cursor < scroll_top + list_rows`
    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll_top {
            self.scroll_top = self.cursor;
        } else if self.cursor >= self.scroll_top.saturating_add(self.list_rows) {
            self.scroll_top = self.cursor + 1 - self.list_rows;
        }
    }
}
