//! Archive downloads written to the download directory.

use std::fs;
use std::io::Write;

use super::http_client::transport;
use super::*;

impl RemoteClient {
    /// Every recording on the server, as one archive.
    pub fn download_all(&self) -> Result<PathBuf, CatalogError> {
        let resp = self
            .client
            .get(self.url(&["download-all"]))
            .send()
            .map_err(transport)?;
        let resp = self.ensure_ok(resp, "download all")?;
        self.save_archive(resp, "recordings.zip")
    }

    pub(super) fn save_archive(
        &self,
        mut resp: reqwest::blocking::Response,
        fallback: &str,
    ) -> Result<PathBuf, CatalogError> {
        let name = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_name)
            .unwrap_or_else(|| fallback.to_string());

        fs::create_dir_all(&self.download_dir).map_err(|e| {
            CatalogError::Io(format!("create {}: {e}", self.download_dir.display()))
        })?;
        let path = self.download_dir.join(&name);
        // The body lands in a sibling part file and replaces `path` only once
        // it is complete.
        let part = self.download_dir.join(format!(".{name}.part"));
        let written = match write_body(&mut resp, &part) {
            Ok(written) => written,
            Err(err) => {
                let _ = fs::remove_file(&part);
                return Err(err);
            }
        };
        fs::rename(&part, &path)
            .map_err(|e| CatalogError::Io(format!("replace {}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = written, "archive saved");
        Ok(path)
    }
}

fn write_body(resp: &mut reqwest::blocking::Response, part: &Path) -> Result<u64, CatalogError> {
    let mut file = fs::File::create(part)
        .map_err(|e| CatalogError::Io(format!("create {}: {e}", part.display())))?;
    let written = resp.copy_to(&mut file).map_err(transport)?;
    file.flush()
        .map_err(|e| CatalogError::Io(format!("write {}: {e}", part.display())))?;
    Ok(written)
}

/// The `filename=` parameter of a Content-Disposition value, reduced to a bare
/// file name so a hostile header cannot escape the download directory.
pub(crate) fn attachment_name(header: &str) -> Option<String> {
    let raw = header.split(';').map(str::trim).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("filename")
            .then(|| value.trim().trim_matches('"'))
    })?;
    let name = Path::new(raw).file_name()?.to_str()?;
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
#[path = "../tests/remote/transfer_tests.rs"]
mod tests;
