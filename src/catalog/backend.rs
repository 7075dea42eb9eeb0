use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Aggregate answer to a batch delete. There is no per-item outcome, so the
/// batch is all-or-nothing from the client's point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The server-side recording store as the catalog sees it.
pub trait CatalogBackend {
    /// Ordered filenames, newest first as the server decides.
    fn list_recordings(&self) -> Result<Vec<String>, CatalogError>;

    fn delete_recording(&self, filename: &str) -> Result<(), CatalogError>;

    fn delete_recordings(&self, ids: &[String]) -> Result<BatchDeleteReply, CatalogError>;

    fn rename_recording(&self, old_filename: &str, new_filename: &str)
    -> Result<(), CatalogError>;

    /// Fetches an archive of `files` and stores it locally. Returns where it went.
    fn download_selected(&self, files: &[String]) -> Result<PathBuf, CatalogError>;
}
