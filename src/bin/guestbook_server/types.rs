use super::*;

#[derive(Clone, Debug)]
pub(super) struct AppState {
    pub(super) recordings_dir: PathBuf,
}

pub(super) type SharedState = Arc<AppState>;

#[derive(Debug, serde::Deserialize)]
pub(super) struct BatchDeleteBody {
    #[serde(default)]
    pub(super) ids: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RenameBody {
    #[serde(rename = "newFilename")]
    pub(super) new_filename: String,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SystemStatus {
    pub(super) success: bool,
    /// Regular files in the recordings directory.
    pub(super) recordings: usize,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct Reply {
    pub(super) success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) message: Option<String>,
}

impl Reply {
    pub(super) fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub(super) fn refused(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
