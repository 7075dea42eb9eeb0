use super::*;
use crate::catalog::test_support::{loaded, names, ticket};
use crate::catalog::CatalogError;

fn base() -> Url {
    Url::parse("http://guestbook.local:8080").unwrap()
}

#[test]
fn single_timestamped_recording_renders_one_row() {
    let catalog = loaded(&["2024-01-01T10:00:00.wav"]);
    let CatalogView::Rows { rows, banner } = catalog.render(&base()) else {
        panic!("expected rows");
    };
    assert_eq!(banner, None);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.index, 0);
    assert_eq!(row.name, "2024-01-01T10:00:00.wav");
    assert_eq!(row.timestamp, "January 1, 2024 at 10:00 AM");
    assert!(!row.selected);
    assert_eq!(
        row.audio_url.as_deref(),
        Some("http://guestbook.local:8080/recordings/2024-01-01T10:00:00.wav")
    );
    assert_eq!(row.slide, Slide::Resting);
    assert!(catalog.batch_controls_visible());
}

#[test]
fn empty_list_renders_placeholder_and_hides_batch_controls() {
    let catalog = loaded(&[]);
    assert_eq!(
        catalog.render(&base()),
        CatalogView::Placeholder(Placeholder::Empty)
    );
    assert!(!catalog.batch_controls_visible());
}

#[test]
fn before_first_load_the_placeholder_says_loading() {
    let catalog = Catalog::default();
    assert_eq!(
        catalog.render(&base()),
        CatalogView::Placeholder(Placeholder::Loading)
    );
}

#[test]
fn failed_first_load_renders_failure_placeholder() {
    let mut catalog = Catalog::default();
    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Err(CatalogError::Transport("connection refused".into())));
    match catalog.render(&base()) {
        CatalogView::Placeholder(Placeholder::Failed { message }) => {
            assert!(message.contains("connection refused"));
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn failed_reload_keeps_rows_with_banner() {
    let mut catalog = loaded(&["a.wav"]);
    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Err(CatalogError::Transport("timed out".into())));
    let CatalogView::Rows { rows, banner } = catalog.render(&base()) else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 1);
    assert!(banner.is_some_and(|b| b.contains("timed out")));
}

#[test]
fn rows_without_timestamp_render_empty_date() {
    let catalog = loaded(&["voicemail.wav"]);
    let CatalogView::Rows { rows, .. } = catalog.render(&base()) else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].timestamp, "");
}

#[test]
fn rendering_twice_is_stable() {
    let mut catalog = loaded(&["b.wav", "a.wav"]);
    catalog.set_row_selected(1, true);
    assert_eq!(catalog.render(&base()), catalog.render(&base()));

    let t = ticket(catalog.begin_load());
    catalog.apply_load(t, Ok(names(&["b.wav", "a.wav"])));
    let CatalogView::Rows { rows, .. } = catalog.render(&base()) else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].accent, crate::model::Recording::new("b.wav").accent());
    assert!(rows[1].selected);
}
