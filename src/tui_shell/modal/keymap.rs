use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::{BatchDeleteConfirmation, DeleteConfirmation};

use super::super::{Modal, ModalKind};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum ModalAction {
    None,
    Close,
    /// The rename buffer changed; mirrors into the row's draft name.
    Edited {
        filename: String,
        value: String,
    },
    /// Enter in the rename field: the equivalent of the name losing focus.
    CommitRename {
        filename: String,
        value: String,
    },
    CancelRename {
        filename: String,
    },
    ConfirmDelete(DeleteConfirmation),
    DeclineDelete(DeleteConfirmation),
    ConfirmDeleteSelected(BatchDeleteConfirmation),
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match &modal.kind {
        ModalKind::Viewer => handle_viewer_key(modal, key),

        ModalKind::ConfirmDelete(confirmation) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                ModalAction::ConfirmDelete(confirmation.clone())
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                ModalAction::DeclineDelete(confirmation.clone())
            }
            _ => ModalAction::None,
        },

        ModalKind::ConfirmDeleteSelected(confirmation) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                ModalAction::ConfirmDeleteSelected(confirmation.clone())
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
            _ => ModalAction::None,
        },

        ModalKind::Rename { filename } => {
            let filename = filename.clone();
            match key.code {
                KeyCode::Esc => ModalAction::CancelRename { filename },
                KeyCode::Enter => ModalAction::CommitRename {
                    filename,
                    value: modal.input.buf.clone(),
                },
                _ => {
                    if apply_input_edit_key(modal, key) {
                        ModalAction::Edited {
                            filename,
                            value: modal.input.buf.clone(),
                        }
                    } else {
                        ModalAction::None
                    }
                }
            }
        }
    }
}

fn handle_viewer_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            ModalAction::Close
        }
        KeyCode::Up | KeyCode::Char('k') => {
            modal.scroll = modal.scroll.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if modal.scroll < modal.lines.len().saturating_sub(1) {
                modal.scroll += 1;
            }
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}

/// Returns true when the buffer text changed.
fn apply_input_edit_key(modal: &mut Modal, key: KeyEvent) -> bool {
    let before = modal.input.buf.len();
    match key.code {
        KeyCode::Backspace => modal.input.backspace(),
        KeyCode::Delete => modal.input.delete(),
        KeyCode::Left => modal.input.move_left(),
        KeyCode::Right => modal.input.move_right(),
        KeyCode::Home => modal.input.home(),
        KeyCode::End => modal.input.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            modal.input.clear();
            return true;
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return false;
            }
            modal.input.insert_char(c);
            return true;
        }
        _ => {}
    }
    modal.input.buf.len() != before
}

#[cfg(test)]
#[path = "../../tests/tui_shell/keymap_tests.rs"]
mod tests;
