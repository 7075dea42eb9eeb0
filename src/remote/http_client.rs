use super::*;

impl RemoteClient {
    /// Passes 2xx responses through; anything else becomes `Status`, with the
    /// server's `message`/`error` text when the body carries one.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<ServerMessage>(&body)
            .ok()
            .and_then(ServerMessage::into_text);
        tracing::warn!(label, status = status.as_u16(), ?message, "server rejected request");
        Err(CatalogError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// `{base}/{segments...}`, each segment percent-encoded on its own.
    pub(super) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

pub(super) fn transport(err: reqwest::Error) -> CatalogError {
    CatalogError::Transport(err.without_url().to_string())
}

pub(super) fn decode(err: reqwest::Error) -> CatalogError {
    if err.is_decode() {
        CatalogError::Decode(err.without_url().to_string())
    } else {
        transport(err)
    }
}
