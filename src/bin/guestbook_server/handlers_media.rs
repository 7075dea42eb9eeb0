//! Binary endpoints: audio streaming and zip downloads.

use super::archive::{attachment, zip_files};
use super::ranges::{ByteRange, byte_range};
use super::storage::{existing, list_newest_first};
use super::*;

pub(super) async fn serve_recording(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = validate_filename(&filename) {
        return bad_request(err);
    }
    let Some(path) = existing(&state, &filename) else {
        return not_found(&filename);
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => return internal_error(anyhow::anyhow!("read {}: {}", filename, err)),
    };
    let len = bytes.len() as u64;
    let range = headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok());

    match byte_range(range, len) {
        ByteRange::Full => (
            [
                (header::CONTENT_TYPE, "audio/wav".to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
            ],
            axum::body::Bytes::from(bytes),
        )
            .into_response(),
        ByteRange::Partial { start, end } => {
            let body = bytes[start as usize..=end as usize].to_vec();
            (
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE, "audio/wav".to_string()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                    (
                        header::CONTENT_RANGE,
                        format!("bytes {}-{}/{}", start, end, len),
                    ),
                ],
                axum::body::Bytes::from(body),
            )
                .into_response()
        }
        ByteRange::Unsatisfiable => (
            StatusCode::RANGE_NOT_SATISFIABLE,
            [(header::CONTENT_RANGE, format!("bytes */{}", len))],
        )
            .into_response(),
    }
}

/// Form body with repeated `files[]` fields. Unknown or invalid names are
/// skipped, not fatal.
pub(super) async fn download_selected(
    State(state): State<SharedState>,
    body: axum::body::Bytes,
) -> Response {
    let mut files = Vec::new();
    for (key, value) in url::form_urlencoded::parse(&body) {
        if key != "files[]" {
            continue;
        }
        let name = value.into_owned();
        if validate_filename(&name).is_err() {
            tracing::warn!(%name, "skipping invalid name in download");
            continue;
        }
        match existing(&state, &name) {
            Some(path) => files.push((name, path)),
            None => tracing::warn!(%name, "skipping missing recording in download"),
        }
    }
    tracing::info!(count = files.len(), "zipping selected recordings");
    match zip_files(&files) {
        Ok(bytes) => attachment(bytes, "selected_recordings.zip"),
        Err(err) => internal_error(err),
    }
}

/// Every `.wav` in the recordings directory.
pub(super) async fn download_all(State(state): State<SharedState>) -> Response {
    let names = match list_newest_first(&state.recordings_dir) {
        Ok(names) => names,
        Err(err) => return internal_error(err),
    };
    let files: Vec<(String, PathBuf)> = names
        .into_iter()
        .filter(|name| name.to_ascii_lowercase().ends_with(".wav"))
        .map(|name| {
            let path = state.recordings_dir.join(&name);
            (name, path)
        })
        .collect();
    tracing::info!(count = files.len(), "zipping all recordings");
    match zip_files(&files) {
        Ok(bytes) => attachment(bytes, "recordings.zip"),
        Err(err) => internal_error(err),
    }
}
