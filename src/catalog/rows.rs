use url::Url;

use crate::model::Accent;

use super::{Catalog, LoadStatus, Row, Slide};

/// What stands in for the row list when there are no rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    /// The server answered with an empty list.
    Empty,
    /// The last load failed and there is nothing older to show.
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub filename: String,
    /// Editable display name; the raw filename unless an edit is pending.
    pub name: String,
    pub selected: bool,
    pub audio_url: Option<String>,
    /// Empty when the filename carries no timestamp.
    pub timestamp: String,
    pub accent: Accent,
    pub slide: Slide,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    Placeholder(Placeholder),
    Rows {
        rows: Vec<RowView>,
        /// Set when a reload failed but older rows are still shown.
        banner: Option<String>,
    },
}

impl Catalog {
    pub fn render(&self, base: &Url) -> CatalogView {
        if self.rows.is_empty() {
            let placeholder = match &self.status {
                LoadStatus::Pending => Placeholder::Loading,
                LoadStatus::Ready => Placeholder::Empty,
                LoadStatus::Failed { message } => Placeholder::Failed {
                    message: message.clone(),
                },
            };
            return CatalogView::Placeholder(placeholder);
        }

        let banner = match &self.status {
            LoadStatus::Failed { message } => Some(message.clone()),
            _ => None,
        };
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| render_row(index, row, base))
            .collect();
        CatalogView::Rows { rows, banner }
    }

    /// Batch download/delete are offered only when there is something to act on.
    pub fn batch_controls_visible(&self) -> bool {
        !self.rows.is_empty()
    }
}

pub(super) fn render_row(index: usize, row: &Row, base: &Url) -> RowView {
    let recording = &row.recording;
    RowView {
        index,
        filename: recording.filename().to_string(),
        name: row.draft_name.clone(),
        selected: row.selected,
        audio_url: recording.audio_url(base).map(String::from),
        timestamp: recording.display_timestamp(),
        accent: recording.accent(),
        slide: row.slide,
    }
}

#[cfg(test)]
#[path = "../tests/catalog/rows_tests.rs"]
mod tests;
