use crossterm::event::{MouseButton, MouseEventKind};

use super::*;

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((row, target)) = app.view.hit_test(mouse.column, mouse.row, app.catalog.len())
            else {
                app.pending_click = None;
                app.gestures.cancel();
                return;
            };
            app.view.selected_row = row;
            app.pending_click = Some(PendingClick { row, target });
            app.gestures.press(row, mouse.column);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let click = app.pending_click.take();
            if let Some(confirmation) = app.gestures.release(&mut app.catalog, mouse.column) {
                app.open_modal(Modal::confirm_delete(confirmation));
                return;
            }
            // Only a release over the pressed row counts as a click.
            let Some(click) = click else {
                return;
            };
            let released_on = app
                .view
                .hit_test(mouse.column, mouse.row, app.catalog.len());
            if released_on.is_some_and(|(row, _)| row == click.row) {
                app.click(click.row, click.target);
            }
        }
        MouseEventKind::ScrollUp => app.view.move_up(),
        MouseEventKind::ScrollDown => app.view.move_down(app.catalog.len()),
        _ => {}
    }
}
