use super::BatchAction;

/// Failures surfaced by catalog operations.
///
/// A declined confirmation is not an error; it simply produces no job.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Connection refused, reset, timed out, or the body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    #[error(
        "server returned status {status}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The server answered but reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("please select at least one recording to {}", .0.verb())]
    EmptySelection(BatchAction),

    #[error("could not save download: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn is_transport(&self) -> bool {
        matches!(self, CatalogError::Transport(_))
    }
}
