use super::*;
use crate::catalog::test_support::{Call, FakeBackend};
use crate::catalog::{CatalogError, LoadStatus, Notice, NoticeLevel};

#[test]
fn reload_issues_a_single_list_request() {
    let backend = FakeBackend::with_files(&["2024-01-01T10:00:00.wav"]);
    let mut catalog = Catalog::default();
    assert_eq!(reload(&mut catalog, &backend), 1);
    assert_eq!(backend.calls(), [Call::List]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.status(), &LoadStatus::Ready);
}

#[test]
fn rename_sends_one_request_then_reloads_once() {
    let backend = FakeBackend::with_files(&["a.wav", "b.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);

    let job = catalog.commit_name(0, "hello.wav").unwrap();
    assert_eq!(run_until_settled(&mut catalog, &backend, job), 2);
    assert_eq!(
        backend.count(|c| matches!(c, Call::Rename(..))),
        1
    );
    assert_eq!(backend.count(|c| *c == Call::List), 2);
    assert_eq!(catalog.rows()[0].filename(), "hello.wav");
}

#[test]
fn unchanged_name_sends_no_request() {
    let backend = FakeBackend::with_files(&["a.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    assert_eq!(catalog.commit_name(0, "a.wav"), None);
    assert_eq!(backend.calls(), [Call::List]);
}

#[test]
fn empty_batch_delete_never_reaches_the_server() {
    let backend = FakeBackend::with_files(&["a.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    assert!(catalog.request_delete_selected().is_err());
    assert_eq!(backend.calls(), [Call::List]);
}

#[test]
fn batch_delete_of_a_subset_does_not_reload() {
    let backend = FakeBackend::with_files(&["a.wav", "b.wav", "c.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    catalog.set_row_selected(1, true);

    let confirmation = catalog.request_delete_selected().unwrap();
    let job = catalog.confirm_delete_selected(confirmation);
    assert_eq!(run_until_settled(&mut catalog, &backend, job), 1);
    assert_eq!(
        backend.calls(),
        [Call::List, Call::DeleteMany(vec!["b.wav".to_string()])]
    );
    assert_eq!(catalog.len(), 2);
}

#[test]
fn batch_delete_of_everything_reloads_to_the_placeholder() {
    let backend = FakeBackend::with_files(&["a.wav", "b.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    catalog.toggle_all();

    let confirmation = catalog.request_delete_selected().unwrap();
    let job = catalog.confirm_delete_selected(confirmation);
    assert_eq!(run_until_settled(&mut catalog, &backend, job), 2);
    assert!(catalog.is_empty());
    assert!(!catalog.batch_controls_visible());
}

#[test]
fn failed_single_delete_still_reloads() {
    let backend = FakeBackend::with_files(&["a.wav"]);
    *backend.delete_error.borrow_mut() = Some(CatalogError::Status {
        status: 404,
        message: None,
    });
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);

    let confirmation = catalog
        .request_delete(0, crate::catalog::DeleteOrigin::Button)
        .unwrap();
    let job = catalog.confirm_delete(confirmation);
    assert_eq!(run_until_settled(&mut catalog, &backend, job), 2);
    assert_eq!(catalog.len(), 1);
    assert!(matches!(
        catalog.take_notices().last(),
        Some(Notice {
            level: NoticeLevel::Error,
            ..
        })
    ));
}

#[test]
fn list_failure_surfaces_a_retryable_notice() {
    let backend = FakeBackend::default();
    *backend.list_error.borrow_mut() = Some(CatalogError::Transport("refused".into()));
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    let notices = catalog.take_notices();
    assert!(notices.iter().any(|n| n.retry));
}

#[test]
fn download_selected_is_a_single_request() {
    let backend = FakeBackend::with_files(&["a.wav", "b.wav"]);
    let mut catalog = Catalog::default();
    reload(&mut catalog, &backend);
    catalog.toggle_all();
    let job = catalog.request_download_selected().unwrap();
    assert_eq!(run_until_settled(&mut catalog, &backend, job), 1);
    assert_eq!(
        backend.calls().last(),
        Some(&Call::Download(vec!["a.wav".to_string(), "b.wav".to_string()]))
    );
}
