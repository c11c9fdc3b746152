//! Integration tests for termdir
//!
//! These tests feed raw terminal bytes through the decoder and dispatcher,
//! then check the directory state and the rendered frame.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use termdir::action::Launcher;
use termdir::core::{AppState, TopBarAction};
use termdir::error::Result;
use termdir::handler::{dispatch, ActionContext, ActionResult};
use termdir::input::decode;
use termdir::render::{render_frame, Dimensions, HeaderLayout};

const SIZE: Dimensions = Dimensions {
    rows: 8,
    columns: 60,
};

/// Launcher that only records what it was asked to open
#[derive(Default)]
struct NullLauncher {
    opened: Vec<PathBuf>,
}

impl Launcher for NullLauncher {
    fn open_with_default_handler(&mut self, path: &Path) -> Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn spawn_interactive_shell(&mut self, _cwd: &Path) -> Result<()> {
        Ok(())
    }

    fn spawn_detached(&mut self, _command: &str, _args: &[String], _cwd: &Path) -> Result<()> {
        Ok(())
    }
}

/// A browser session over a temp directory, driven by raw bytes
struct Session {
    state: AppState,
    top_bar: Vec<TopBarAction>,
    launcher: NullLauncher,
    header: HeaderLayout,
}

impl Session {
    fn new(root: &Path) -> Self {
        let mut session = Self {
            state: AppState::new(root.to_path_buf(), true, false),
            top_bar: TopBarAction::defaults(),
            launcher: NullLauncher::default(),
            header: HeaderLayout::default(),
        };
        session.redraw();
        session
    }

    /// Reload and render, as the event loop does before each read
    fn redraw(&mut self) -> Vec<String> {
        self.state.nav.reload().unwrap();
        self.state
            .nav
            .set_list_rows(usize::from(SIZE.rows.saturating_sub(1)));
        let frame = render_frame(&self.state, &self.top_bar, SIZE);
        self.header = frame.header.clone();
        (0..usize::from(SIZE.rows))
            .map(|row| frame.line_text(row))
            .collect()
    }

    fn feed(&mut self, bytes: &[u8]) -> Vec<ActionResult> {
        let results = decode(bytes)
            .map(|event| {
                let mut context = ActionContext {
                    top_bar: &self.top_bar,
                    launcher: &mut self.launcher,
                };
                dispatch(&event, &mut self.state, &self.header, &mut context)
            })
            .collect();
        self.redraw();
        results
    }

    fn focused_name(&self) -> Option<&str> {
        self.state.nav.focused().map(|e| e.name.as_str())
    }
}

/// `c/`, `a/` (with `a/inner.txt`) and `b.txt`
fn create_test_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.txt"), "b").unwrap();
    fs::create_dir(temp.path().join("a")).unwrap();
    fs::create_dir(temp.path().join("c")).unwrap();
    fs::write(temp.path().join("a/inner.txt"), "inner").unwrap();
    temp
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_initial_frame_lists_directories_first() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());
    let lines = session.redraw();

    assert_eq!(lines.len(), usize::from(SIZE.rows));
    assert!(lines[0].starts_with(&format!(" {}/", temp.path().display())));
    assert!(lines[1].starts_with(" c/"));
    assert!(lines[2].starts_with(" a/"));
    assert!(lines[3].starts_with(" b.txt"));
    assert!(lines[4].trim().is_empty());
}

#[test]
fn test_arrow_keys_enter_and_leave_directory() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1b[B");
    assert_eq!(session.focused_name(), Some("a"));

    session.feed(b"\r");
    assert_eq!(session.state.nav.current_path, temp.path().join("a"));
    assert_eq!(session.focused_name(), Some("inner.txt"));

    session.feed(b"\x7f");
    assert_eq!(session.state.nav.current_path, temp.path());
}

#[test]
fn test_enter_on_file_opens_it() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1b[F\r");
    assert_eq!(session.launcher.opened, vec![temp.path().join("b.txt")]);
    assert_eq!(session.state.nav.current_path, temp.path());
}

#[test]
fn test_typed_prefix_jumps_to_match() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"b");
    assert_eq!(session.focused_name(), Some("b.txt"));
}

#[test]
fn test_mouse_click_moves_then_enters() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    // Row 3 is the second entry
    session.feed(b"\x1b[<0;5;3M");
    assert_eq!(session.focused_name(), Some("a"));

    session.feed(b"\x1b[<0;5;3M");
    assert_eq!(session.state.nav.current_path, temp.path().join("a"));
}

#[test]
fn test_wheel_scrolls_cursor() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1b[<65;1;2M\x1b[<65;1;2M");
    assert_eq!(session.focused_name(), Some("b.txt"));
    session.feed(b"\x1b[<64;1;2M");
    assert_eq!(session.focused_name(), Some("a"));
}

// =============================================================================
// Overlays
// =============================================================================

#[test]
fn test_delete_confirmation_removes_entry() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1b[F\x1b[3~");
    let lines = session.redraw();
    assert!(lines[0].trim().is_empty());
    assert!(lines[1].starts_with("Do you want to delete b.txt? [y,N]: "));

    session.feed(b"y");
    session.feed(b"\r");
    assert!(session.state.overlay.is_none());
    assert!(!temp.path().join("b.txt").exists());
    assert!(session.state.nav.entries.iter().all(|e| e.name != "b.txt"));
}

#[test]
fn test_overlay_cursor_follows_prompt() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x0e");
    session.feed(b"new");
    let frame = render_frame(&session.state, &session.top_bar, SIZE);
    assert_eq!(frame.line_text(1).trim_end(), "New folder: new");
    assert_eq!(frame.cursor, Some((15, 1)));
}

#[test]
fn test_new_folder_is_created_and_focused() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x0e");
    session.feed(b"docs");
    session.feed(b"\r");
    assert!(temp.path().join("docs").is_dir());
    assert_eq!(session.focused_name(), Some("docs"));
}

#[test]
fn test_escape_cancels_rename() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1bOQ");
    assert!(session.state.overlay.is_some());
    session.feed(b"\x1b");
    assert!(session.state.overlay.is_none());
    assert!(temp.path().join("c").is_dir());
}

#[test]
fn test_ctrl_c_quits_from_overlay() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x04");
    let results = session.feed(b"\x03");
    assert_eq!(results, vec![ActionResult::Quit(termdir::exit_code::SUCCESS)]);
}

// =============================================================================
// Selection and clipboard
// =============================================================================

#[test]
fn test_marked_entries_render_with_marker() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b" ");
    let lines = session.redraw();
    assert!(lines[1].starts_with("*c/"));
    assert!(lines[2].starts_with(" a/"));
}

#[test]
fn test_yank_and_paste_into_other_directory() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    // Yank b.txt, enter c/, paste
    session.feed(b"\x1b[F\x19");
    session.feed(b"\x1b[H\r");
    assert_eq!(session.state.nav.current_path, temp.path().join("c"));
    session.feed(b"\x16");

    assert_eq!(
        fs::read_to_string(temp.path().join("c/b.txt")).unwrap(),
        "b"
    );
    assert_eq!(session.focused_name(), Some("b.txt"));
}

// =============================================================================
// Drag and drop
// =============================================================================

#[test]
fn test_dropped_path_is_copied_into_current_directory() {
    let temp = create_test_dir();
    let outside = TempDir::new().unwrap();
    let source = outside.path().join("my photo.png");
    fs::write(&source, "png").unwrap();

    let mut session = Session::new(temp.path());
    let paste = format!("\x1b[200~'{}'\x1b[201~", source.display());
    session.feed(paste.as_bytes());

    assert!(temp.path().join("my photo.png").exists());
    assert!(source.exists());
}

#[test]
fn test_dropped_uri_is_decoded() {
    let temp = create_test_dir();
    let outside = TempDir::new().unwrap();
    let source = outside.path().join("a b.txt");
    fs::write(&source, "x").unwrap();

    let mut session = Session::new(temp.path());
    let uri = format!(
        "\x1b[200~file://{}\x1b[201~",
        source.display().to_string().replace(' ', "%20")
    );
    session.feed(uri.as_bytes());

    assert!(temp.path().join("a b.txt").exists());
}

// =============================================================================
// External changes
// =============================================================================

#[test]
fn test_vanished_directory_climbs_to_parent() {
    let temp = create_test_dir();
    let mut session = Session::new(temp.path());

    session.feed(b"\x1b[B\r");
    assert_eq!(session.state.nav.current_path, temp.path().join("a"));

    fs::remove_dir_all(temp.path().join("a")).unwrap();
    session.redraw();
    assert_eq!(session.state.nav.current_path, temp.path());
    assert!(session.state.nav.entries.iter().all(|e| e.name != "a"));
}
