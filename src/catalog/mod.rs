//! Recording catalog: keeps the rendered rows consistent with the server's
//! list across asynchronous rename/delete/batch-delete, and owns selection.
//!
//! The engine performs no I/O. Operations emit [`Job`]s; whoever runs them
//! (the TUI worker thread, or [`driver`] for blocking callers) feeds the
//! matching [`Completion`] back through [`Catalog::apply`], which may return
//! follow-up jobs (reloads).

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::model::{Recording, ReconcileMode};

mod backend;
mod batch;
pub mod driver;
mod error;
mod gesture;
mod loader;
mod mutations;
mod rows;
mod selection;

pub use self::backend::{BatchDeleteReply, CatalogBackend};
pub use self::batch::{BatchAction, BatchDeleteConfirmation};
pub use self::error::CatalogError;
pub use self::gesture::{DeviceProfile, GestureHandler, SWIPE_THRESHOLD, Slide};
pub use self::loader::{LoadOutcome, LoadTicket};
pub use self::mutations::{DeleteConfirmation, DeleteOrigin};
pub use self::rows::{CatalogView, Placeholder, RowView};
pub use self::selection::{ClickEffect, RowTarget, SelectionSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has completed yet.
    Pending,
    Ready,
    Failed { message: String },
}

#[derive(Clone, Debug)]
pub struct Row {
    recording: Recording,
    selected: bool,
    draft_name: String,
    slide: Slide,
}

impl Row {
    fn new(recording: Recording) -> Self {
        let draft_name = recording.filename().to_string();
        Self {
            recording,
            selected: false,
            draft_name,
            slide: Slide::Resting,
        }
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    pub fn filename(&self) -> &str {
        self.recording.filename()
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing message. `retry` marks load failures the user can re-issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub retry: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    Load(LoadTicket),
    Rename { from: String, to: String },
    DeleteOne { filename: String },
    DeleteSelected { ids: Vec<String> },
    DownloadSelected { files: Vec<String> },
}

impl Job {
    pub fn label(&self) -> &'static str {
        match self {
            Job::Load(_) => "load",
            Job::Rename { .. } => "rename",
            Job::DeleteOne { .. } => "delete",
            Job::DeleteSelected { .. } => "delete-selected",
            Job::DownloadSelected { .. } => "download-selected",
        }
    }
}

#[derive(Debug)]
pub enum Completion {
    Loaded {
        ticket: LoadTicket,
        result: Result<Vec<String>, CatalogError>,
    },
    Renamed {
        from: String,
        to: String,
        result: Result<(), CatalogError>,
    },
    DeletedOne {
        filename: String,
        result: Result<(), CatalogError>,
    },
    DeletedSelected {
        ids: Vec<String>,
        result: Result<BatchDeleteReply, CatalogError>,
    },
    DownloadedSelected {
        count: usize,
        result: Result<PathBuf, CatalogError>,
    },
}

pub struct Catalog {
    rows: Vec<Row>,
    status: LoadStatus,
    reconcile: ReconcileMode,
    generation: u64,
    loads_in_flight: usize,
    notices: VecDeque<Notice>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(ReconcileMode::default())
    }
}

impl Catalog {
    pub fn new(reconcile: ReconcileMode) -> Self {
        Self {
            rows: Vec::new(),
            status: LoadStatus::Pending,
            reconcile,
            generation: 0,
            loads_in_flight: 0,
            notices: VecDeque::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub fn position(&self, filename: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.filename() == filename)
    }

    /// Feed a finished job back in. Returns follow-up jobs to run.
    pub fn apply(&mut self, completion: Completion) -> Vec<Job> {
        match completion {
            Completion::Loaded { ticket, result } => {
                self.apply_load(ticket, result);
                Vec::new()
            }
            Completion::Renamed { from, to, result } => self.apply_rename(&from, &to, result),
            Completion::DeletedOne { filename, result } => {
                self.apply_delete_one(&filename, result)
            }
            Completion::DeletedSelected { ids, result } => self.apply_delete_selected(&ids, result),
            Completion::DownloadedSelected { count, result } => {
                self.apply_download(count, result);
                Vec::new()
            }
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push_back(Notice {
            level,
            text: text.into(),
            retry: false,
        });
    }
}

#[cfg(test)]
#[path = "../tests/catalog/support.rs"]
pub(crate) mod test_support;
