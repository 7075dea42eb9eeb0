//! Request and response bodies of the recordings server.

use serde::{Deserialize, Serialize};

pub use crate::catalog::BatchDeleteReply;

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenameRequest {
    #[serde(rename = "newFilename")]
    pub new_filename: String,
}

/// The loose `{success, message}` / `{error}` shape most endpoints answer with.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServerMessage {
    pub fn into_text(self) -> Option<String> {
        self.message.or(self.error)
    }
}
