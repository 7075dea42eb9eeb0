use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use super::*;
use crate::catalog::{BatchDeleteReply, CatalogBackend, CatalogError, Slide};
use crate::tui_shell::worker::WorkerBackend;

/// Thread-safe in-memory server the worker thread can own.
#[derive(Clone, Default)]
struct SharedBackend {
    files: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl SharedBackend {
    fn with_files(list: &[&str]) -> Self {
        let backend = Self::default();
        *backend.files.lock().unwrap() = list.iter().map(|s| s.to_string()).collect();
        backend
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CatalogBackend for SharedBackend {
    fn list_recordings(&self) -> Result<Vec<String>, CatalogError> {
        self.record("list".to_string());
        Ok(self.files.lock().unwrap().clone())
    }

    fn delete_recording(&self, filename: &str) -> Result<(), CatalogError> {
        self.record(format!("delete {filename}"));
        self.files.lock().unwrap().retain(|f| f != filename);
        Ok(())
    }

    fn delete_recordings(&self, ids: &[String]) -> Result<BatchDeleteReply, CatalogError> {
        self.record(format!("delete-recordings {}", ids.join(",")));
        self.files.lock().unwrap().retain(|f| !ids.contains(f));
        Ok(BatchDeleteReply {
            success: true,
            message: None,
        })
    }

    fn rename_recording(&self, old_filename: &str, new_filename: &str) -> Result<(), CatalogError> {
        self.record(format!("rename {old_filename} {new_filename}"));
        for f in self.files.lock().unwrap().iter_mut() {
            if f == old_filename {
                *f = new_filename.to_string();
            }
        }
        Ok(())
    }

    fn download_selected(&self, files: &[String]) -> Result<PathBuf, CatalogError> {
        self.record(format!("download {}", files.join(",")));
        Ok(PathBuf::from("selected_recordings.zip"))
    }
}

impl WorkerBackend for SharedBackend {
    fn download_all(&self) -> Result<PathBuf, CatalogError> {
        self.record("download-all".to_string());
        Ok(PathBuf::from("recordings.zip"))
    }
}

fn app_with(backend: &SharedBackend, device: DeviceProfile) -> App {
    let worker = Worker::spawn(backend.clone()).unwrap();
    let base = Url::parse("http://127.0.0.1:8080").unwrap();
    let mut app = App::new(Catalog::default(), base, device, worker);
    app.reload();
    settle(&mut app);
    // Rows as they would be laid out on an 80-column terminal.
    app.view.list_area = Rect::new(0, 3, 80, 10);
    app
}

/// Wait for the worker to drain, applying results like the event loop does.
fn settle(app: &mut App) {
    while app.worker.in_flight() > 0 {
        let outcome = app
            .worker
            .recv_timeout(Duration::from_secs(5))
            .expect("worker answered");
        app.absorb(outcome);
    }
}

fn press(app: &mut App, code: KeyCode) {
    event_loop::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    mouse::handle_mouse(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

fn click(app: &mut App, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
    mouse(app, MouseEventKind::Up(MouseButton::Left), column, row);
}

#[test]
fn startup_reload_fills_the_catalog() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav"]);
    let app = app_with(&backend, DeviceProfile::Pointer);
    assert_eq!(app.catalog.len(), 2);
    assert_eq!(backend.calls(), ["list"]);
}

#[test]
fn select_all_key_flips_every_row() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(
        render::select_all_label(app.catalog.selection_summary(), 2),
        "[x] all 2"
    );
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(
        render::select_all_label(app.catalog.selection_summary(), 2),
        "[-] 1/2"
    );
}

#[test]
fn delete_selected_with_nothing_selected_only_warns() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('D'));
    assert!(app.modal.is_none());
    assert_eq!(app.status.as_ref().map(|n| n.level), Some(NoticeLevel::Warning));
    settle(&mut app);
    assert_eq!(backend.calls(), ["list"]);
}

#[test]
fn declined_delete_sends_nothing() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('x'));
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::ConfirmDelete(_))
    ));
    press(&mut app, KeyCode::Char('n'));
    assert!(app.modal.is_none());
    settle(&mut app);
    assert_eq!(backend.calls(), ["list"]);
    assert_eq!(app.catalog.len(), 2);
}

#[test]
fn confirmed_delete_removes_the_row_after_reload() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app);
    assert_eq!(backend.calls(), ["list", "delete b.wav", "list"]);
    assert_eq!(app.catalog.len(), 1);
    assert_eq!(app.view.selected_row, 0);
}

#[test]
fn batch_delete_of_a_subset_keeps_the_rest_without_reload() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav", "c.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('D'));
    press(&mut app, KeyCode::Enter);
    settle(&mut app);
    assert_eq!(backend.calls(), ["list", "delete-recordings a.wav"]);
    let left: Vec<&str> = app.catalog.rows().iter().map(|r| r.filename()).collect();
    assert_eq!(left, ["b.wav", "c.wav"]);
}

#[test]
fn rename_through_the_modal_reloads_once() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('e'));
    event_loop::handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
    );
    for c in "hello.wav".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.catalog.rows()[0].draft_name(), "hello.wav");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);
    assert_eq!(backend.calls(), ["list", "rename a.wav hello.wav", "list"]);
    assert_eq!(app.catalog.rows()[0].filename(), "hello.wav");
}

#[test]
fn escape_restores_the_name() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.catalog.rows()[0].draft_name(), "a.wavx");
    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
    assert_eq!(app.catalog.rows()[0].draft_name(), "a.wav");
    settle(&mut app);
    assert_eq!(backend.calls(), ["list"]);
}

#[test]
fn clicks_on_controls_do_not_toggle_the_row() {
    let backend = SharedBackend::with_files(&["a.wav", "b.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);

    // Checkbox of the second row: selected exactly once.
    click(&mut app, 1, 4);
    assert!(app.catalog.rows()[1].selected());
    assert_eq!(app.view.selected_row, 1);

    // Body (the date column) toggles it back.
    click(&mut app, 50, 4);
    assert!(!app.catalog.rows()[1].selected());

    // The name opens the rename modal and leaves selection alone.
    click(&mut app, 10, 3);
    assert!(!app.catalog.rows()[0].selected());
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::Rename { filename }) if filename == "a.wav"
    ));
}

#[test]
fn clicks_below_the_last_row_are_ignored() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    click(&mut app, 50, 8);
    assert!(!app.catalog.rows()[0].selected());
    assert!(app.modal.is_none());
}

#[test]
fn swipe_left_asks_and_declining_slides_back() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Touch);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 60, 3);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 40, 3);
    assert_eq!(app.catalog.rows()[0].slide(), Slide::SlidOut);
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::ConfirmDelete(_))
    ));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.catalog.rows()[0].slide(), Slide::Resting);
    assert!(!app.catalog.rows()[0].selected());
}

#[test]
fn download_all_reports_the_archive() {
    let backend = SharedBackend::with_files(&["a.wav"]);
    let mut app = app_with(&backend, DeviceProfile::Pointer);
    press(&mut app, KeyCode::Char('S'));
    settle(&mut app);
    assert_eq!(backend.calls(), ["list", "download-all"]);
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.level, NoticeLevel::Success);
    assert!(status.text.contains("recordings.zip"));
}
