use super::*;
use crate::catalog::test_support::{loaded, names, ticket};
use crate::catalog::{LoadStatus, NoticeLevel};

#[test]
fn successful_load_rebuilds_rows_in_server_order() {
    let catalog = loaded(&["b.wav", "a.wav", "c.wav"]);
    let order: Vec<&str> = catalog.rows().iter().map(|r| r.filename()).collect();
    assert_eq!(order, ["b.wav", "a.wav", "c.wav"]);
    assert_eq!(catalog.status(), &LoadStatus::Ready);
    assert!(!catalog.is_loading());
}

#[test]
fn only_the_latest_issued_load_is_applied() {
    let mut catalog = Catalog::default();
    let first = ticket(catalog.begin_load());
    let second = ticket(catalog.begin_load());
    assert!(catalog.is_loading());

    // The newer request resolves first, the older one last.
    assert_eq!(
        catalog.apply_load(second, Ok(names(&["new.wav"]))),
        LoadOutcome::Applied { rows: 1 }
    );
    assert_eq!(
        catalog.apply_load(first, Ok(names(&["old.wav", "older.wav"]))),
        LoadOutcome::Stale
    );

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.rows()[0].filename(), "new.wav");
    assert!(!catalog.is_loading());
}

#[test]
fn stale_failures_do_not_mark_the_catalog_failed() {
    let mut catalog = Catalog::default();
    let first = ticket(catalog.begin_load());
    let second = ticket(catalog.begin_load());
    catalog.apply_load(second, Ok(names(&["a.wav"])));
    let outcome = catalog.apply_load(first, Err(CatalogError::Transport("reset".into())));
    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(catalog.status(), &LoadStatus::Ready);
    assert!(catalog.take_notices().is_empty());
}

#[test]
fn failed_load_keeps_previous_rows_and_offers_retry() {
    let mut catalog = loaded(&["a.wav", "b.wav"]);
    let t = ticket(catalog.begin_load());
    let outcome = catalog.apply_load(
        t,
        Err(CatalogError::Status {
            status: 500,
            message: Some("disk gone".into()),
        }),
    );
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(catalog.len(), 2);
    assert!(matches!(catalog.status(), LoadStatus::Failed { message } if message.contains("disk gone")));

    let notices = catalog.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].retry);
    assert!(notices[0].text.starts_with("Failed to load recordings"));
}

#[test]
fn keyed_reload_preserves_selection_of_surviving_rows() {
    let mut catalog = loaded(&["a.wav", "b.wav", "c.wav"]);
    catalog.set_row_selected(0, true);
    catalog.set_row_selected(2, true);
    catalog.edit_name(1, "draft");

    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Ok(names(&["new.wav", "c.wav", "b.wav"])));

    let state: Vec<(&str, bool)> = catalog
        .rows()
        .iter()
        .map(|r| (r.filename(), r.selected()))
        .collect();
    assert_eq!(state, [("new.wav", false), ("c.wav", true), ("b.wav", false)]);
    assert_eq!(catalog.rows()[2].draft_name(), "b.wav");
}

#[test]
fn rebuild_mode_discards_all_selection() {
    let mut catalog = Catalog::new(ReconcileMode::Rebuild);
    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Ok(names(&["a.wav", "b.wav"])));
    catalog.set_all_selected(true);

    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Ok(names(&["a.wav", "b.wav"])));
    assert!(catalog.rows().iter().all(|r| !r.selected()));
}
