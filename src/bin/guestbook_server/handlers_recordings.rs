//! JSON endpoints: list, status, delete, batch delete, rename.

use std::fs;

use super::storage::{existing, list_newest_first};
use super::*;

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn list_recordings(State(state): State<SharedState>) -> Response {
    match list_newest_first(&state.recordings_dir) {
        Ok(files) => {
            tracing::debug!(count = files.len(), "listed recordings");
            Json(files).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(super) async fn system_status(State(state): State<SharedState>) -> Response {
    match list_newest_first(&state.recordings_dir) {
        Ok(files) => Json(SystemStatus {
            success: true,
            recordings: files.len(),
        })
        .into_response(),
        Err(err) => internal_error(err),
    }
}

pub(super) async fn delete_recording(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Response {
    if let Err(err) = validate_filename(&filename) {
        return bad_request(err);
    }
    let Some(path) = existing(&state, &filename) else {
        return not_found(&filename);
    };
    if let Err(err) = fs::remove_file(&path) {
        return internal_error(anyhow::anyhow!("delete {}: {}", filename, err));
    }
    tracing::info!(%filename, "recording deleted");
    Json(Reply::ok(format!("{} has been deleted.", filename))).into_response()
}

/// All or nothing: every id is checked before the first file is removed.
pub(super) async fn delete_recordings(
    State(state): State<SharedState>,
    Json(body): Json<BatchDeleteBody>,
) -> Response {
    if body.ids.is_empty() {
        return failure(
            StatusCode::BAD_REQUEST,
            "No recordings specified for deletion",
        );
    }

    // Each file is checked and removed once, however often its id repeats.
    let mut ids: Vec<&str> = Vec::with_capacity(body.ids.len());
    for id in &body.ids {
        if !ids.contains(&id.as_str()) {
            ids.push(id);
        }
    }

    let mut paths = Vec::with_capacity(ids.len());
    for id in ids {
        if let Err(err) = validate_filename(id) {
            return Json(Reply::refused(format!("{}: {}", id, err))).into_response();
        }
        match existing(&state, id) {
            Some(path) => paths.push(path),
            None => {
                tracing::warn!(%id, "batch delete refused, recording missing");
                return Json(Reply::refused(format!("Recording {} not found", id)))
                    .into_response();
            }
        }
    }

    for path in &paths {
        if let Err(err) = fs::remove_file(path) {
            return internal_error(anyhow::anyhow!("delete {}: {}", path.display(), err));
        }
    }
    tracing::info!(count = paths.len(), "recordings deleted");
    Json(Reply::ok(format!(
        "Successfully deleted {} recordings",
        paths.len()
    )))
    .into_response()
}

pub(super) async fn rename_recording(
    State(state): State<SharedState>,
    Path(old_filename): Path<String>,
    Json(body): Json<RenameBody>,
) -> Response {
    let new_filename = body.new_filename.trim();
    if let Err(err) = validate_filename(&old_filename) {
        return bad_request(err);
    }
    if let Err(err) = validate_filename(new_filename) {
        return bad_request(err);
    }
    let Some(old_path) = existing(&state, &old_filename) else {
        return not_found(&old_filename);
    };
    if new_filename == old_filename {
        return Json(Reply::ok("unchanged")).into_response();
    }
    let new_path = state.recordings_dir.join(new_filename);
    if new_path.exists() {
        return conflict(&format!("{} already exists", new_filename));
    }
    if let Err(err) = fs::rename(&old_path, &new_path) {
        return internal_error(anyhow::anyhow!("rename {}: {}", old_filename, err));
    }
    tracing::info!(from = %old_filename, to = %new_filename, "recording renamed");
    Json(Reply::ok(format!("Renamed to {}", new_filename))).into_response()
}
