//! Header layout shared by the renderer and the mouse hit-test

use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::core::TopBarAction;

/// One drawn top-bar label and the columns it occupies (0-based, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderButton {
    pub start: u16,
    pub end: u16,
    /// Index into the configured top-bar actions
    pub action: usize,
}

/// Where the header path ends and the right-aligned labels begin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Columns available to the path text
    pub path_width: u16,
    pub buttons: Vec<HeaderButton>,
}

impl HeaderLayout {
    /// Lay out the labels visible for `path`, right-aligned in `columns`.
    ///
    /// Labels are dropped entirely when they do not fit.
    pub fn compute(path: &Path, top_bar: &[TopBarAction], columns: u16) -> Self {
        let visible: Vec<(usize, u16)> = top_bar
            .iter()
            .enumerate()
            .filter_map(|(i, action)| {
                let label = action.label_for(path)?;
                Some((i, u16::try_from(label.width()).unwrap_or(u16::MAX)))
            })
            .collect();
        let total: u32 = visible.iter().map(|(_, w)| u32::from(*w)).sum();

        if visible.is_empty() || total > u32::from(columns) {
            return Self {
                path_width: columns,
                buttons: Vec::new(),
            };
        }

        let mut start = columns - total as u16;
        let path_width = start;
        let buttons = visible
            .into_iter()
            .map(|(action, width)| {
                let button = HeaderButton {
                    start,
                    end: start + width,
                    action,
                };
                start += width;
                button
            })
            .collect();
        Self {
            path_width,
            buttons,
        }
    }

    /// Header with the whole width given to the path (message or overlay shown)
    pub fn without_buttons(columns: u16) -> Self {
        Self {
            path_width: columns,
            buttons: Vec::new(),
        }
    }

    /// Action whose label covers the 0-based `column`
    pub fn hit(&self, column: u16) -> Option<usize> {
        self.buttons
            .iter()
            .find(|b| (b.start..b.end).contains(&column))
            .map(|b| b.action)
    }
}
