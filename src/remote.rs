use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::catalog::CatalogError;
use crate::model::ClientConfig;

mod http_client;

mod types;
pub use self::types::*;
mod operations;
mod transfer;

/// Blocking HTTP client for the recordings server.
pub struct RemoteClient {
    base_url: Url,
    download_dir: PathBuf,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("parse server url {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("server url {} cannot be used as a base", config.base_url);
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent("guestbook")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url,
            download_dir: config.download_dir(),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Same server, different destination for archives.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }
}
