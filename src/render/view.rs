//! Frame rendering
//!
//! [`render_frame`] turns the application state into exactly `rows` lines of
//! exactly `columns` cells. It reads nothing but its arguments, so a frame
//! can be asserted on in tests without a terminal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::icons::glyph_for;
use super::layout::HeaderLayout;
use crate::core::{AppState, DirEntry, TopBarAction};

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u16,
    pub columns: u16,
}

/// A rendered screen
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<Line<'static>>,
    /// Terminal cursor position (column, row), hidden when None
    pub cursor: Option<(u16, u16)>,
    /// Header label positions, for mouse hit-testing
    pub header: HeaderLayout,
}

impl Frame {
    /// Plain text of one line, for tests and logging
    pub fn line_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .unwrap_or_default()
    }
}

/// Reverse style for the header and the cursor row
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Render the whole screen
pub fn render_frame(state: &AppState, top_bar: &[TopBarAction], size: Dimensions) -> Frame {
    let rows = usize::from(size.rows);
    let columns = size.columns;

    if let Some(overlay) = &state.overlay {
        let prompt = overlay.prompt();
        let mut lines = vec![blank(columns); rows];
        // Row 1 below a blank header, or row 0 on a one-line terminal
        let prompt_row = rows.min(2).saturating_sub(1);
        if let Some(line) = lines.get_mut(prompt_row) {
            *line = Line::from(fit(&prompt, columns));
        }
        let cursor_col = u16::try_from(prompt.width())
            .unwrap_or(u16::MAX)
            .min(columns.saturating_sub(1));
        let cursor_row = u16::try_from(prompt_row).unwrap_or(0);
        return Frame {
            lines,
            cursor: (rows > 0).then_some((cursor_col, cursor_row)),
            header: HeaderLayout::without_buttons(columns),
        };
    }

    let nav = &state.nav;
    let header = match state.message {
        Some(_) => HeaderLayout::without_buttons(columns),
        None => HeaderLayout::compute(&nav.current_path, top_bar, columns),
    };

    let mut lines = Vec::with_capacity(rows);
    if rows > 0 {
        lines.push(header_line(state, top_bar, &header, columns));
    }
    for row in 0..rows.saturating_sub(1) {
        let index = nav.scroll_top + row;
        let line = match nav.entries.get(index) {
            Some(entry) => entry_line(state, entry, index == nav.cursor, columns),
            None => blank(columns),
        };
        lines.push(line);
    }

    Frame {
        lines,
        cursor: None,
        header,
    }
}

fn header_line(
    state: &AppState,
    top_bar: &[TopBarAction],
    header: &HeaderLayout,
    columns: u16,
) -> Line<'static> {
    let style = header_style();
    let path = state.nav.current_path.display().to_string();
    let path_text = if path.ends_with('/') {
        format!(" {}", path)
    } else {
        format!(" {}/", path)
    };

    if let Some(message) = &state.message {
        let message = format!(" {} ", message);
        let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        if message_width < columns {
            let path_width = columns - message_width;
            return Line::from(vec![
                Span::styled(fit(&path_text, path_width), style),
                Span::styled(message, style.fg(Color::Red)),
            ]);
        }
        return Line::from(Span::styled(fit(&message, columns), style.fg(Color::Red)));
    }

    let mut spans = vec![Span::styled(fit(&path_text, header.path_width), style)];
    for button in &header.buttons {
        spans.push(Span::styled(top_bar[button.action].label.clone(), style));
    }
    Line::from(spans)
}

fn entry_line(state: &AppState, entry: &DirEntry, is_cursor: bool, columns: u16) -> Line<'static> {
    let selected = state.nav.is_selected(&entry.name);
    let mut text = String::new();
    text.push(if selected { '*' } else { ' ' });
    if state.icons_enabled {
        text.push_str(glyph_for(&entry.name, entry.kind));
        text.push(' ');
    }
    text.push_str(&entry.name);
    if entry.is_dir() {
        text.push('/');
    }

    let style = if is_cursor {
        header_style()
    } else if selected {
        Style::default().fg(Color::Yellow)
    } else if entry.is_dir() {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };
    Line::from(Span::styled(fit(&text, columns), style))
}

fn blank(columns: u16) -> Line<'static> {
    Line::from(" ".repeat(usize::from(columns)))
}

/// Truncate or pad `text` to exactly `width` display cells.
///
/// A wide character that would straddle the edge is replaced by padding.
pub fn fit(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
