use super::*;
use crate::catalog::test_support::{loaded, ticket};
use crate::catalog::{Completion, Slide};

#[test]
fn committing_the_same_name_sends_nothing() {
    let mut catalog = loaded(&["a.wav"]);
    assert_eq!(catalog.commit_name(0, "a.wav"), None);
    assert_eq!(catalog.commit_name(0, "  a.wav  "), None);
    assert!(catalog.take_notices().is_empty());
}

#[test]
fn committing_a_new_name_emits_one_rename() {
    let mut catalog = loaded(&["a.wav"]);
    catalog.edit_name(0, "greeting.wav ");
    assert_eq!(catalog.rows()[0].draft_name(), "greeting.wav ");
    assert_eq!(
        catalog.commit_name(0, "greeting.wav "),
        Some(Job::Rename {
            from: "a.wav".into(),
            to: "greeting.wav".into()
        })
    );
    assert_eq!(catalog.rows()[0].draft_name(), "greeting.wav");
}

#[test]
fn blank_name_reverts_and_warns() {
    let mut catalog = loaded(&["a.wav"]);
    assert_eq!(catalog.commit_name(0, "   "), None);
    assert_eq!(catalog.rows()[0].draft_name(), "a.wav");
    let notice = catalog.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
}

#[test]
fn successful_rename_reloads() {
    let mut catalog = loaded(&["a.wav"]);
    let follow_up = catalog.apply(Completion::Renamed {
        from: "a.wav".into(),
        to: "b.wav".into(),
        result: Ok(()),
    });
    assert_eq!(follow_up.len(), 1);
    assert!(matches!(follow_up[0], Job::Load(_)));
    assert_eq!(catalog.last_notice().unwrap().level, NoticeLevel::Success);
}

#[test]
fn failed_rename_reverts_the_draft_without_reloading() {
    let mut catalog = loaded(&["a.wav", "b.wav"]);
    catalog.edit_name(0, "taken.wav");
    let job = catalog.commit_name(0, "taken.wav").unwrap();
    let Job::Rename { from, to } = job else {
        panic!("expected rename");
    };

    let follow_up = catalog.apply(Completion::Renamed {
        from,
        to,
        result: Err(CatalogError::Status {
            status: 409,
            message: Some("exists".into()),
        }),
    });
    assert!(follow_up.is_empty());
    assert_eq!(catalog.rows()[0].draft_name(), "a.wav");
    let notice = catalog.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Failed to rename the file"));
}

#[test]
fn delete_button_asks_before_sending() {
    let mut catalog = loaded(&["a.wav"]);
    let confirmation = catalog.request_delete(0, DeleteOrigin::Button).unwrap();
    assert_eq!(confirmation.prompt(), "Are you sure you want to delete a.wav?");
    assert_eq!(catalog.rows()[0].slide(), Slide::Resting);
    assert_eq!(
        catalog.confirm_delete(confirmation),
        Job::DeleteOne {
            filename: "a.wav".into()
        }
    );
}

#[test]
fn declining_a_swiped_delete_slides_the_row_back() {
    let mut catalog = loaded(&["a.wav"]);
    let confirmation = catalog.request_delete(0, DeleteOrigin::Swipe).unwrap();
    assert_eq!(catalog.rows()[0].slide(), Slide::SlidOut);
    catalog.decline_delete(confirmation);
    assert_eq!(catalog.rows()[0].slide(), Slide::Resting);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn delete_reloads_whether_or_not_it_succeeded() {
    let mut catalog = loaded(&["a.wav"]);
    let ok = catalog.apply(Completion::DeletedOne {
        filename: "a.wav".into(),
        result: Ok(()),
    });
    assert!(matches!(ok.as_slice(), [Job::Load(_)]));

    let failed = catalog.apply(Completion::DeletedOne {
        filename: "a.wav".into(),
        result: Err(CatalogError::Status {
            status: 404,
            message: None,
        }),
    });
    assert!(matches!(failed.as_slice(), [Job::Load(t)] if t.generation() == ticket(ok[0].clone()).generation() + 1));
    assert_eq!(catalog.last_notice().unwrap().level, NoticeLevel::Error);
}
