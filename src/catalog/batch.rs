use std::path::PathBuf;

use super::{BatchDeleteReply, Catalog, CatalogError, Job, NoticeLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchAction {
    Download,
    Delete,
}

impl BatchAction {
    pub fn verb(self) -> &'static str {
        match self {
            BatchAction::Download => "download",
            BatchAction::Delete => "delete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchDeleteConfirmation {
    pub ids: Vec<String>,
}

impl BatchDeleteConfirmation {
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {} selected recording(s)?",
            self.ids.len()
        )
    }
}

impl Catalog {
    /// Fire-and-forget archive of the current selection.
    pub fn request_download_selected(&mut self) -> Result<Job, CatalogError> {
        let files = self.nonempty_selection(BatchAction::Download)?;
        Ok(Job::DownloadSelected { files })
    }

    pub fn request_delete_selected(&mut self) -> Result<BatchDeleteConfirmation, CatalogError> {
        let ids = self.nonempty_selection(BatchAction::Delete)?;
        Ok(BatchDeleteConfirmation { ids })
    }

    pub fn confirm_delete_selected(&mut self, confirmation: BatchDeleteConfirmation) -> Job {
        Job::DeleteSelected {
            ids: confirmation.ids,
        }
    }

    fn nonempty_selection(&mut self, action: BatchAction) -> Result<Vec<String>, CatalogError> {
        let selected = self.selected_filenames();
        if selected.is_empty() {
            let err = CatalogError::EmptySelection(action);
            self.notify(NoticeLevel::Warning, capitalize(&err.to_string()));
            return Err(err);
        }
        Ok(selected)
    }

    /// Success removes exactly the deleted rows in place; only an emptied
    /// catalog is reloaded (to show the placeholder). Failure removes nothing.
    pub(super) fn apply_delete_selected(
        &mut self,
        ids: &[String],
        result: Result<BatchDeleteReply, CatalogError>,
    ) -> Vec<Job> {
        let failure = match result {
            Ok(reply) if reply.success => None,
            Ok(reply) => Some(
                reply
                    .message
                    .unwrap_or_else(|| "Failed to delete recordings".to_string()),
            ),
            Err(err) => Some(err.to_string()),
        };

        if let Some(message) = failure {
            tracing::warn!(count = ids.len(), %message, "batch delete failed");
            self.notify(
                NoticeLevel::Error,
                format!("Error deleting recordings: {message}"),
            );
            return Vec::new();
        }

        self.rows.retain(|row| !ids.iter().any(|id| id == row.filename()));
        tracing::info!(count = ids.len(), remaining = self.rows.len(), "batch delete applied");
        self.notify(
            NoticeLevel::Success,
            format!("Deleted {} recording(s)", ids.len()),
        );

        if self.rows.is_empty() {
            vec![self.begin_load()]
        } else {
            Vec::new()
        }
    }

    pub(super) fn apply_download(&mut self, count: usize, result: Result<PathBuf, CatalogError>) {
        match result {
            Ok(path) => {
                tracing::info!(count, path = %path.display(), "download saved");
                self.notify(
                    NoticeLevel::Success,
                    format!("Saved {} recording(s) to {}", count, path.display()),
                );
            }
            Err(err) => {
                tracing::warn!(count, error = %err, "download failed");
                self.notify(
                    NoticeLevel::Error,
                    format!("Error downloading recordings: {err}"),
                );
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../tests/catalog/batch_tests.rs"]
mod tests;
