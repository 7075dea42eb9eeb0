use super::*;

pub(super) fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Reply::refused(message))).into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    tracing::error!(error = %format!("{:#}", err), "request failed");
    failure(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
}

pub(super) fn bad_request(err: anyhow::Error) -> Response {
    failure(StatusCode::BAD_REQUEST, err.to_string())
}

pub(super) fn not_found(filename: &str) -> Response {
    failure(StatusCode::NOT_FOUND, format!("{} not found", filename))
}

pub(super) fn conflict(msg: &str) -> Response {
    failure(StatusCode::CONFLICT, msg)
}
