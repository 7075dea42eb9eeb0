use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.pump();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Mouse(m) => handle_mouse(app, m),
                _ => {}
            }
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    super::mouse::handle_mouse(app, mouse);
}

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,

        KeyCode::Up | KeyCode::Char('k') => app.view.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.view.move_down(app.catalog.len()),

        KeyCode::Char(' ') => app.toggle_checkbox(),
        KeyCode::Enter => app.toggle_current_row(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Char('e') => app.open_rename(),
        KeyCode::Char('p') => app.play_current(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_current(),
        KeyCode::Char('D') => app.delete_selected(),
        KeyCode::Char('s') => app.download_selected(),
        KeyCode::Char('S') => app.download_all(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('?') => app.show_help(),

        _ => {}
    }
}
