use super::{Catalog, CatalogError, Job, NoticeLevel, Slide};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOrigin {
    Button,
    Swipe,
}

/// A single delete waiting on the user's yes/no.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub filename: String,
    pub origin: DeleteOrigin,
}

impl DeleteConfirmation {
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.filename)
    }
}

impl Catalog {
    /// Live edit of a row's display name. Nothing is sent until commit.
    pub fn edit_name(&mut self, index: usize, text: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.draft_name = text.to_string();
        }
    }

    /// The name field lost focus. Emits a rename only if the trimmed text
    /// differs from the row's filename.
    pub fn commit_name(&mut self, index: usize, text: &str) -> Option<Job> {
        let row = self.rows.get_mut(index)?;
        let new_name = text.trim();
        row.draft_name = new_name.to_string();
        if new_name == row.filename() {
            return None;
        }
        if new_name.is_empty() {
            row.draft_name = row.filename().to_string();
            self.notify(NoticeLevel::Warning, "A recording name cannot be empty.");
            return None;
        }
        Some(Job::Rename {
            from: row.filename().to_string(),
            to: new_name.to_string(),
        })
    }

    pub fn request_delete(
        &mut self,
        index: usize,
        origin: DeleteOrigin,
    ) -> Option<DeleteConfirmation> {
        let row = self.rows.get_mut(index)?;
        if origin == DeleteOrigin::Swipe {
            row.slide = Slide::SlidOut;
        }
        Some(DeleteConfirmation {
            filename: row.filename().to_string(),
            origin,
        })
    }

    pub fn confirm_delete(&mut self, confirmation: DeleteConfirmation) -> Job {
        Job::DeleteOne {
            filename: confirmation.filename,
        }
    }

    /// The user said no. Nothing changes except a swiped row sliding back.
    pub fn decline_delete(&mut self, confirmation: DeleteConfirmation) {
        if let Some(idx) = self.position(&confirmation.filename) {
            self.rows[idx].slide = Slide::Resting;
        }
    }

    pub(super) fn apply_rename(
        &mut self,
        from: &str,
        to: &str,
        result: Result<(), CatalogError>,
    ) -> Vec<Job> {
        match result {
            Ok(()) => {
                tracing::info!(from, to, "recording renamed");
                self.notify(NoticeLevel::Success, format!("Renamed {from} to {to}"));
                vec![self.begin_load()]
            }
            Err(err) => {
                tracing::warn!(from, to, error = %err, "rename failed");
                if let Some(idx) = self.position(from) {
                    self.rows[idx].draft_name = from.to_string();
                }
                self.notify(
                    NoticeLevel::Error,
                    format!("Failed to rename the file: {err}"),
                );
                Vec::new()
            }
        }
    }

    pub(super) fn apply_delete_one(
        &mut self,
        filename: &str,
        result: Result<(), CatalogError>,
    ) -> Vec<Job> {
        match result {
            Ok(()) => {
                tracing::info!(filename, "recording deleted");
                self.notify(NoticeLevel::Success, format!("Deleted {filename}"));
            }
            Err(err) => {
                tracing::warn!(filename, error = %err, "delete failed");
                self.notify(
                    NoticeLevel::Error,
                    format!("Error deleting {filename}: {err}"),
                );
            }
        }
        vec![self.begin_load()]
    }
}

#[cfg(test)]
#[path = "../tests/catalog/mutations_tests.rs"]
mod tests;
