use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};

#[path = "guestbook_server/types.rs"]
mod types;
use self::types::*;
#[path = "guestbook_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "guestbook_server/validators.rs"]
mod validators;
use self::validators::*;
#[path = "guestbook_server/storage.rs"]
mod storage;
#[path = "guestbook_server/archive.rs"]
mod archive;
#[path = "guestbook_server/ranges.rs"]
mod ranges;
#[path = "guestbook_server/handlers_recordings.rs"]
mod handlers_recordings;
#[path = "guestbook_server/handlers_media.rs"]
mod handlers_media;
#[path = "guestbook_server/routes.rs"]
mod routes;
#[path = "guestbook_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
