use crate::catalog::{ClickEffect, DeleteOrigin};

use super::*;

const HELP: &[&str] = &[
    "up/down, j/k   move",
    "space          select row (checkbox)",
    "enter          toggle row selection",
    "a              select all / none",
    "e              rename",
    "p              play in the default player",
    "x, Del         delete",
    "D              delete selected",
    "s              download selected",
    "S              download all",
    "r              reload",
    "q, Esc         quit",
    "",
    "mouse: click a checkbox, name, play or delete control;",
    "click elsewhere on a row to toggle it.",
];

impl App {
    fn current(&self) -> Option<usize> {
        let idx = self.view.selected_row;
        (idx < self.catalog.len()).then_some(idx)
    }

    pub(super) fn toggle_checkbox(&mut self) {
        if let Some(idx) = self.current() {
            self.catalog.toggle_row(idx);
        }
    }

    pub(super) fn toggle_current_row(&mut self) {
        if let Some(idx) = self.current() {
            self.click(idx, RowTarget::Body);
        }
    }

    pub(super) fn toggle_all(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.catalog.toggle_all();
    }

    /// Route a click on `target` of row `idx`. Controls act on their own; a
    /// click on the row body toggles it.
    pub(super) fn click(&mut self, idx: usize, target: RowTarget) {
        match self.catalog.click_row(idx, target) {
            ClickEffect::Toggled { .. } | ClickEffect::NoSuchRow => {}
            ClickEffect::Consumed(RowTarget::Checkbox) => {
                self.catalog.toggle_row(idx);
            }
            ClickEffect::Consumed(RowTarget::Playback) => self.play(idx),
            ClickEffect::Consumed(RowTarget::Delete) => self.delete(idx),
            ClickEffect::Consumed(RowTarget::Name) => self.rename(idx),
            ClickEffect::Consumed(RowTarget::Body) => {}
        }
    }

    pub(super) fn open_rename(&mut self) {
        if let Some(idx) = self.current() {
            self.rename(idx);
        }
    }

    fn rename(&mut self, idx: usize) {
        let Some(row) = self.catalog.row(idx) else {
            return;
        };
        let modal = Modal::rename(row.filename(), row.draft_name());
        self.open_modal(modal);
    }

    pub(super) fn play_current(&mut self) {
        if let Some(idx) = self.current() {
            self.play(idx);
        }
    }

    fn play(&mut self, idx: usize) {
        let Some(url) = self
            .catalog
            .row(idx)
            .and_then(|row| row.recording().audio_url(&self.base_url))
        else {
            return;
        };
        tracing::info!(%url, "opening recording");
        if let Err(err) = open::that_detached(url.as_str()) {
            tracing::warn!(%url, error = %err, "could not open player");
            self.set_status(NoticeLevel::Error, format!("Could not open {url}: {err}"));
        }
    }

    pub(super) fn delete_current(&mut self) {
        if let Some(idx) = self.current() {
            self.delete(idx);
        }
    }

    fn delete(&mut self, idx: usize) {
        if let Some(confirmation) = self.catalog.request_delete(idx, DeleteOrigin::Button) {
            self.open_modal(Modal::confirm_delete(confirmation));
        }
    }

    pub(super) fn delete_selected(&mut self) {
        match self.catalog.request_delete_selected() {
            Ok(confirmation) => self.open_modal(Modal::confirm_delete_selected(confirmation)),
            Err(_) => self.collect_notices(),
        }
    }

    pub(super) fn download_selected(&mut self) {
        match self.catalog.request_download_selected() {
            Ok(job) => {
                self.set_status(NoticeLevel::Info, "Downloading selected recordings...");
                self.dispatch(job);
            }
            Err(_) => self.collect_notices(),
        }
    }

    pub(super) fn download_all(&mut self) {
        self.set_status(NoticeLevel::Info, "Downloading all recordings...");
        if !self.worker.submit(Task::DownloadAll) {
            self.set_status(NoticeLevel::Error, "background worker stopped; restart the app");
        }
    }

    pub(super) fn show_help(&mut self) {
        let lines = HELP.iter().map(|s| s.to_string()).collect();
        self.open_modal(Modal::viewer("Keys", lines));
    }
}
