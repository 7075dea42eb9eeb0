use crate::catalog::{BatchDeleteConfirmation, DeleteConfirmation};

use super::super::input::Input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    ConfirmDelete(DeleteConfirmation),
    ConfirmDeleteSelected(BatchDeleteConfirmation),
    /// Editing the name of `filename`. Rows are looked up by name on every
    /// keystroke since a reload may land while the modal is open.
    Rename { filename: String },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) scroll: usize,
}

impl Modal {
    pub(in crate::tui_shell) fn viewer(title: &str, lines: Vec<String>) -> Self {
        Self {
            kind: ModalKind::Viewer,
            title: title.to_string(),
            lines,
            input: Input::default(),
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(confirmation: DeleteConfirmation) -> Self {
        Self {
            title: "Delete recording".to_string(),
            lines: vec![confirmation.prompt(), String::new(), "y: delete   n: keep".to_string()],
            kind: ModalKind::ConfirmDelete(confirmation),
            input: Input::default(),
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn confirm_delete_selected(
        confirmation: BatchDeleteConfirmation,
    ) -> Self {
        Self {
            title: "Delete selected".to_string(),
            lines: vec![confirmation.prompt(), String::new(), "y: delete   n: keep".to_string()],
            kind: ModalKind::ConfirmDeleteSelected(confirmation),
            input: Input::default(),
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn rename(filename: &str, draft: &str) -> Self {
        Self {
            kind: ModalKind::Rename {
                filename: filename.to_string(),
            },
            title: "Rename".to_string(),
            lines: vec![format!("current: {filename}")],
            input: Input::with_text(draft),
            scroll: 0,
        }
    }
}
