use super::Catalog;

/// State of the "select all" control, derived from the rows each time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSummary {
    None,
    Partial { selected: usize, total: usize },
    All { total: usize },
}

impl SelectionSummary {
    /// The select-all box is checked only when every row is selected.
    pub fn select_all_checked(self) -> bool {
        matches!(self, SelectionSummary::All { .. })
    }

    pub fn indeterminate(self) -> bool {
        matches!(self, SelectionSummary::Partial { .. })
    }

    pub fn selected(self) -> usize {
        match self {
            SelectionSummary::None => 0,
            SelectionSummary::Partial { selected, .. } => selected,
            SelectionSummary::All { total } => total,
        }
    }
}

/// The part of a row a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTarget {
    Checkbox,
    Playback,
    Delete,
    Name,
    /// Anywhere else: accent, date, padding.
    Body,
}

impl RowTarget {
    /// Controls that own their clicks; the row-level toggle must not fire.
    pub fn consumes_click(self) -> bool {
        !matches!(self, RowTarget::Body)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickEffect {
    Toggled { selected: bool },
    /// The target handles the click itself (checkbox change, play, delete, edit).
    Consumed(RowTarget),
    NoSuchRow,
}

impl Catalog {
    pub fn selection_summary(&self) -> SelectionSummary {
        let total = self.rows.len();
        let selected = self.rows.iter().filter(|r| r.selected).count();
        if selected == 0 {
            SelectionSummary::None
        } else if selected == total {
            SelectionSummary::All { total }
        } else {
            SelectionSummary::Partial { selected, total }
        }
    }

    /// The select-all control changed.
    pub fn set_all_selected(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.selected = checked;
        }
    }

    /// Flip the select-all control: checks everything unless everything is
    /// already checked.
    pub fn toggle_all(&mut self) -> bool {
        let checked = !self.selection_summary().select_all_checked();
        self.set_all_selected(checked);
        checked
    }

    /// A row's checkbox changed. Returns false if the row does not exist.
    pub fn set_row_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get_mut(index)?;
        row.selected = !row.selected;
        Some(row.selected)
    }

    /// Row-level click. Only clicks on the row body toggle selection.
    pub fn click_row(&mut self, index: usize, target: RowTarget) -> ClickEffect {
        if index >= self.rows.len() {
            return ClickEffect::NoSuchRow;
        }
        if target.consumes_click() {
            return ClickEffect::Consumed(target);
        }
        match self.toggle_row(index) {
            Some(selected) => ClickEffect::Toggled { selected },
            None => ClickEffect::NoSuchRow,
        }
    }

    /// Select rows by filename; unknown names are returned.
    pub fn select_filenames<'a>(&mut self, names: &'a [String]) -> Vec<&'a str> {
        let mut unknown = Vec::new();
        for name in names {
            match self.position(name) {
                Some(idx) => self.rows[idx].selected = true,
                None => unknown.push(name.as_str()),
            }
        }
        unknown
    }

    pub fn selected_filenames(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.filename().to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/catalog/selection_tests.rs"]
mod tests;
