//! Where the allow-list text comes from.

use async_trait::async_trait;

use crate::error::StoreError;

/// Fetches the raw allow-list text.
///
/// Implementations perform one fetch per call; callers decide when to retry.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AllowListSource: Send + Sync {
    async fn fetch(&self) -> Result<String, StoreError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Allow-list text known up front (bundled asset, tests).
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AllowListSource for StaticSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Allow-list read from the local filesystem.
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "fs")]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "fs")]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AllowListSource for FileSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Transport(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Allow-list served over HTTP(S). The URL must be absolute.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg(feature = "http")]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AllowListSource for HttpSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        // Non-2xx bodies (usually an HTML fallback page) are never an allow-list.
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Transport(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        resp.text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
