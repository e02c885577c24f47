//! Browser-backed session storage and allow-list fetching.

use allowlist_auth::{AllowListSource, KeyValueStorage, StorageError, StoreError};
use async_trait::async_trait;

/// `window.localStorage`, looked up on every call so a missing or disabled
/// store surfaces as an error instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Fetches the allow-list with the browser's `fetch`, so relative URLs
/// resolve against the page origin.
#[derive(Debug, Clone)]
pub struct BrowserSource {
    url: String,
}

impl BrowserSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl AllowListSource for BrowserSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        let resp = gloo_net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(StoreError::Transport(format!(
                "{} returned {}",
                self.url,
                resp.status()
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
