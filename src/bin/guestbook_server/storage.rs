//! Plain-file access to the recordings directory.

use std::fs;
use std::time::SystemTime;

use super::*;

/// Regular files only, newest modification time first. Ties fall back to
/// name order so the listing is stable.
pub(super) fn list_newest_first(dir: &std::path::Path) -> Result<Vec<String>> {
    let mut entries: Vec<(SystemTime, String)> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let meta = entry
            .metadata()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if !meta.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "skipping non-utf8 file name");
            continue;
        };
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        entries.push((modified, name));
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    Ok(entries.into_iter().map(|(_, name)| name).collect())
}

/// Path of an existing recording, `None` when there is no such file.
pub(super) fn existing(state: &AppState, filename: &str) -> Option<PathBuf> {
    let path = state.recordings_dir.join(filename);
    path.is_file().then_some(path)
}

#[cfg(test)]
#[path = "../../tests/bin/guestbook_server/storage_tests.rs"]
mod tests;
