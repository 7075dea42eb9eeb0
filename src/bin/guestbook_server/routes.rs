use axum::routing::{get, post};

use super::handlers_media::{download_all, download_selected, serve_recording};
use super::handlers_recordings::{
    delete_recording, delete_recordings, healthz, list_recordings, rename_recording,
    system_status,
};
use super::*;

pub(super) fn router(state: SharedState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/recordings", get(list_recordings))
        .route("/api/system-status", get(system_status))
        .route("/delete/:filename", post(delete_recording))
        .route("/delete-recordings", post(delete_recordings))
        .route("/rename/:filename", post(rename_recording))
        .route("/download-selected", post(download_selected))
        .route("/download-all", get(download_all))
        .route("/recordings/:filename", get(serve_recording))
        .with_state(state)
}
