use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;

pub(super) use self::draw::draw_modal;

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),

        ModalAction::Edited { filename, value } => {
            if let Some(idx) = app.catalog_mut().position(&filename) {
                app.catalog_mut().edit_name(idx, &value);
            }
        }

        ModalAction::CommitRename { filename, value } => {
            app.close_modal();
            let Some(idx) = app.catalog_mut().position(&filename) else {
                return;
            };
            if let Some(job) = app.catalog_mut().commit_name(idx, &value) {
                app.dispatch(job);
            }
            app.collect_notices();
        }

        ModalAction::CancelRename { filename } => {
            app.close_modal();
            if let Some(idx) = app.catalog_mut().position(&filename) {
                app.catalog_mut().edit_name(idx, &filename);
            }
        }

        ModalAction::ConfirmDelete(confirmation) => {
            app.close_modal();
            let job = app.catalog_mut().confirm_delete(confirmation);
            app.dispatch(job);
        }

        ModalAction::DeclineDelete(confirmation) => {
            app.close_modal();
            app.catalog_mut().decline_delete(confirmation);
        }

        ModalAction::ConfirmDeleteSelected(confirmation) => {
            app.close_modal();
            let job = app.catalog_mut().confirm_delete_selected(confirmation);
            app.dispatch(job);
        }
    }
}
