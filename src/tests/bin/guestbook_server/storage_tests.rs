use std::time::{Duration, SystemTime};

use super::*;

fn touch(dir: &std::path::Path, name: &str, age_secs: u64) {
    let path = dir.join(name);
    std::fs::write(&path, b"RIFF").unwrap();
    let file = std::fs::File::options().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .unwrap();
}

#[test]
fn newest_first_skips_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "old.wav", 300);
    touch(dir.path(), "new.wav", 10);
    touch(dir.path(), "mid.wav", 100);
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    let names = list_newest_first(dir.path()).unwrap();
    assert_eq!(names, vec!["new.wav", "mid.wav", "old.wav"]);
}

#[test]
fn existing_only_matches_files() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.wav", 0);
    std::fs::create_dir(dir.path().join("b.wav")).unwrap();
    let state = AppState {
        recordings_dir: dir.path().to_path_buf(),
    };
    assert!(existing(&state, "a.wav").is_some());
    assert!(existing(&state, "b.wav").is_none());
    assert!(existing(&state, "c.wav").is_none());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_newest_first(&dir.path().join("gone")).is_err());
}
