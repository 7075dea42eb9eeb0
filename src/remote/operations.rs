//! List/rename/delete against the recordings endpoints.

use super::http_client::{decode, transport};
use super::*;
use crate::catalog::{BatchDeleteReply, CatalogBackend};

impl RemoteClient {
    fn cache_buster() -> String {
        (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string()
    }

    /// A 2xx reply that still says `success: false` is a rejection.
    fn check_success(resp: reqwest::blocking::Response) -> Result<(), CatalogError> {
        let body = resp.text().map_err(transport)?;
        match serde_json::from_str::<ServerMessage>(&body) {
            Ok(msg) if msg.success == Some(false) => Err(CatalogError::Rejected(
                msg.into_text()
                    .unwrap_or_else(|| "the server refused the request".to_string()),
            )),
            _ => Ok(()),
        }
    }
}

impl CatalogBackend for RemoteClient {
    fn list_recordings(&self) -> Result<Vec<String>, CatalogError> {
        let resp = self
            .client
            .get(self.url(&["api", "recordings"]))
            .query(&[("t", Self::cache_buster())])
            .send()
            .map_err(transport)?;
        let files: Vec<String> = self
            .ensure_ok(resp, "list recordings")?
            .json()
            .map_err(decode)?;
        tracing::debug!(count = files.len(), "listed recordings");
        Ok(files)
    }

    fn delete_recording(&self, filename: &str) -> Result<(), CatalogError> {
        let resp = self
            .client
            .post(self.url(&["delete", filename]))
            .send()
            .map_err(transport)?;
        Self::check_success(self.ensure_ok(resp, "delete recording")?)
    }

    fn delete_recordings(&self, ids: &[String]) -> Result<BatchDeleteReply, CatalogError> {
        let resp = self
            .client
            .post(self.url(&["delete-recordings"]))
            .json(&BatchDeleteRequest { ids: ids.to_vec() })
            .send()
            .map_err(transport)?;
        self.ensure_ok(resp, "delete recordings")?
            .json()
            .map_err(decode)
    }

    fn rename_recording(&self, old_filename: &str, new_filename: &str) -> Result<(), CatalogError> {
        let resp = self
            .client
            .post(self.url(&["rename", old_filename]))
            .json(&RenameRequest {
                new_filename: new_filename.to_string(),
            })
            .send()
            .map_err(transport)?;
        Self::check_success(self.ensure_ok(resp, "rename recording")?)
    }

    fn download_selected(&self, files: &[String]) -> Result<PathBuf, CatalogError> {
        let form: Vec<(&str, &str)> = files.iter().map(|f| ("files[]", f.as_str())).collect();
        let resp = self
            .client
            .post(self.url(&["download-selected"]))
            .form(&form)
            .send()
            .map_err(transport)?;
        let resp = self.ensure_ok(resp, "download selected")?;
        self.save_archive(resp, "selected_recordings.zip")
    }
}
