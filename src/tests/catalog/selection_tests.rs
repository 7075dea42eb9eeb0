use super::*;
use crate::catalog::test_support::loaded;

#[test]
fn select_all_checks_and_unchecks_every_row() {
    let mut catalog = loaded(&["a.wav", "b.wav", "c.wav"]);
    assert_eq!(catalog.selection_summary(), SelectionSummary::None);

    assert!(catalog.toggle_all());
    assert!(catalog.rows().iter().all(|r| r.selected()));
    assert_eq!(catalog.selection_summary(), SelectionSummary::All { total: 3 });

    assert!(!catalog.toggle_all());
    assert!(catalog.rows().iter().all(|r| !r.selected()));
}

#[test]
fn partial_selection_is_indeterminate_and_select_all_checks_everything() {
    let mut catalog = loaded(&["a.wav", "b.wav", "c.wav"]);
    catalog.set_row_selected(1, true);
    let summary = catalog.selection_summary();
    assert_eq!(
        summary,
        SelectionSummary::Partial {
            selected: 1,
            total: 3
        }
    );
    assert!(summary.indeterminate());
    assert!(!summary.select_all_checked());

    assert!(catalog.toggle_all());
    assert_eq!(catalog.selected_filenames(), ["a.wav", "b.wav", "c.wav"]);
}

#[test]
fn selecting_every_row_by_hand_checks_select_all() {
    let mut catalog = loaded(&["a.wav", "b.wav", "c.wav"]);
    for index in 0..3 {
        assert_eq!(
            catalog.click_row(index, RowTarget::Body),
            ClickEffect::Toggled { selected: true }
        );
    }
    let summary = catalog.selection_summary();
    assert_eq!(summary, SelectionSummary::All { total: 3 });
    assert!(summary.select_all_checked());
    assert!(!summary.indeterminate());

    catalog.set_row_selected(1, false);
    let summary = catalog.selection_summary();
    assert_eq!(
        summary,
        SelectionSummary::Partial {
            selected: 2,
            total: 3
        }
    );
    assert!(!summary.select_all_checked());

    catalog.click_row(1, RowTarget::Body);
    assert!(catalog.selection_summary().select_all_checked());
}

#[test]
fn empty_catalog_select_all_is_unchecked() {
    let catalog = loaded(&[]);
    let summary = catalog.selection_summary();
    assert_eq!(summary, SelectionSummary::None);
    assert!(!summary.select_all_checked());
    assert_eq!(summary.selected(), 0);
}

#[test]
fn body_click_toggles_selection() {
    let mut catalog = loaded(&["a.wav", "b.wav"]);
    assert_eq!(
        catalog.click_row(0, RowTarget::Body),
        ClickEffect::Toggled { selected: true }
    );
    assert_eq!(
        catalog.click_row(0, RowTarget::Body),
        ClickEffect::Toggled { selected: false }
    );
}

#[test]
fn control_clicks_never_toggle_the_row() {
    let mut catalog = loaded(&["a.wav"]);
    for target in [
        RowTarget::Checkbox,
        RowTarget::Playback,
        RowTarget::Delete,
        RowTarget::Name,
    ] {
        assert_eq!(catalog.click_row(0, target), ClickEffect::Consumed(target));
        assert!(!catalog.rows()[0].selected());
    }
}

#[test]
fn checkbox_change_selects_exactly_once() {
    let mut catalog = loaded(&["a.wav"]);
    // A checkbox click is a consumed row click plus the checkbox's own change.
    assert_eq!(
        catalog.click_row(0, RowTarget::Checkbox),
        ClickEffect::Consumed(RowTarget::Checkbox)
    );
    assert_eq!(catalog.toggle_row(0), Some(true));
    assert!(catalog.rows()[0].selected());
}

#[test]
fn clicks_past_the_end_are_ignored() {
    let mut catalog = loaded(&["a.wav"]);
    assert_eq!(catalog.click_row(3, RowTarget::Body), ClickEffect::NoSuchRow);
    assert!(!catalog.set_row_selected(3, true));
    assert_eq!(catalog.toggle_row(3), None);
}

#[test]
fn select_filenames_reports_unknown_names() {
    let mut catalog = loaded(&["a.wav", "b.wav"]);
    let wanted = vec!["b.wav".to_string(), "zzz.wav".to_string()];
    let unknown = catalog.select_filenames(&wanted);
    assert_eq!(unknown, ["zzz.wav"]);
    assert_eq!(catalog.selected_filenames(), ["b.wav"]);
}
