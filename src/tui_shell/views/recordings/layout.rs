//! Column geometry shared by row drawing and mouse hit-testing.

use std::ops::Range;

use crate::catalog::RowTarget;

/// Widest display timestamp ("September 30, 2024 at 12:59 PM").
pub(in crate::tui_shell) const DATE_WIDTH: u16 = 30;
const MIN_NAME_WIDTH: u16 = 8;

pub(in crate::tui_shell) const CHECKED: &str = "[x]";
pub(in crate::tui_shell) const UNCHECKED: &str = "[ ]";
pub(in crate::tui_shell) const ACCENT: &str = "●";
pub(in crate::tui_shell) const PLAY: &str = "▶";
pub(in crate::tui_shell) const DELETE: &str = "✗";

/// `[x] ● name…… ▶ date…… ✗`, one space between fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct RowColumns {
    pub(in crate::tui_shell) checkbox: Range<u16>,
    pub(in crate::tui_shell) accent: Range<u16>,
    pub(in crate::tui_shell) name: Range<u16>,
    pub(in crate::tui_shell) play: Range<u16>,
    pub(in crate::tui_shell) date: Range<u16>,
    pub(in crate::tui_shell) delete: Range<u16>,
}

impl RowColumns {
    pub(in crate::tui_shell) fn for_width(width: u16) -> Self {
        let fixed = 3 + 1 + 1 + 1 + 1 + 1 + 1 + DATE_WIDTH + 1 + 1;
        let name_width = width.saturating_sub(fixed).max(MIN_NAME_WIDTH);

        let checkbox = 0..3;
        let accent = 4..5;
        let name = 6..6 + name_width;
        let play = name.end + 1..name.end + 2;
        let date = play.end + 1..play.end + 1 + DATE_WIDTH;
        let delete = date.end + 1..date.end + 2;
        Self {
            checkbox,
            accent,
            name,
            play,
            date,
            delete,
        }
    }

    pub(in crate::tui_shell) fn name_width(&self) -> usize {
        usize::from(self.name.end - self.name.start)
    }

    /// Column `x` is relative to the row's left edge.
    pub(in crate::tui_shell) fn target_at(&self, x: u16) -> RowTarget {
        if self.checkbox.contains(&x) {
            RowTarget::Checkbox
        } else if self.name.contains(&x) {
            RowTarget::Name
        } else if self.play.contains(&x) {
            RowTarget::Playback
        } else if self.delete.contains(&x) {
            RowTarget::Delete
        } else {
            RowTarget::Body
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/tui_shell/layout_tests.rs"]
mod tests;
