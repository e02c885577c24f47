//! Authorization store: the loaded allow-list.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::identity::{AllowListRow, AuthorizedIdentity};
use crate::source::AllowListSource;

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<AuthorizedIdentity>,
    loaded: bool,
}

/// Process-wide cache of allow-listed identities.
///
/// Build one at startup and share it by `Arc`. Queries never fail: until a
/// [`load`](Self::load) succeeds they answer "not authorized".
pub struct AuthorizationStore {
    source: Arc<dyn AllowListSource>,
    state: RwLock<StoreState>,
}

impl AuthorizationStore {
    pub fn new(source: impl AllowListSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn AllowListSource>) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Fetch and parse the allow-list, replacing whatever was loaded.
    ///
    /// Concurrent calls are not coalesced; each issues its own fetch. On
    /// failure the store is left unloaded and empty.
    pub async fn load(&self) -> Result<usize, StoreError> {
        let result = match self.source.fetch().await {
            Ok(text) => parse_allow_list(&text),
            Err(e) => Err(e),
        };

        let mut state = self.state.write();
        match result {
            Ok(entries) => {
                let count = entries.len();
                state.entries = entries;
                state.loaded = true;
                info!(source = %self.source.describe(), count, "Allow-list loaded");
                Ok(count)
            }
            Err(e) => {
                state.entries.clear();
                state.loaded = false;
                warn!(source = %self.source.describe(), error = %e, "Failed to load allow-list");
                Err(e)
            }
        }
    }

    /// Load only if nothing has been loaded yet.
    pub async fn ensure_loaded(&self) -> Result<(), StoreError> {
        if !self.is_loaded() {
            self.load().await?;
        }
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.read().loaded
    }

    /// True iff `email` is on the loaded list (case-insensitive).
    pub fn is_authorized(&self, email: &str) -> bool {
        self.get_details(email).is_some()
    }

    pub fn get_details(&self, email: &str) -> Option<AuthorizedIdentity> {
        let state = self.state.read();
        if !state.loaded {
            warn!("Allow-list queried before it was loaded");
            return None;
        }

        state.entries.iter().find(|entry| entry.matches(email)).cloned()
    }

    /// Snapshot of every loaded entry, in file order.
    pub fn all(&self) -> Vec<AuthorizedIdentity> {
        self.state.read().entries.clone()
    }
}

/// Parse allow-list CSV text with a header row.
pub(crate) fn parse_allow_list(text: &str) -> Result<Vec<AuthorizedIdentity>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for row in reader.deserialize::<AllowListRow>() {
        if let Some(identity) = row?.into_identity() {
            entries.push(identity);
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ALLOW_LIST: &str = "email,name,role\n\
        admin@example.com,Admin,admin\n\
        ,Nobody,viewer\n\
        Analyst@Example.com,Analyst,viewer\n";

    struct FailingSource;

    #[async_trait]
    impl AllowListSource for FailingSource {
        async fn fetch(&self) -> Result<String, StoreError> {
            Err(StoreError::Transport("connection refused".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    /// Serves the allow-list on the first fetch, fails on every later one.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AllowListSource for FlakySource {
        async fn fetch(&self) -> Result<String, StoreError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(ALLOW_LIST.to_string())
            } else {
                Err(StoreError::Transport("gone".to_string()))
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    #[test]
    fn test_parse_drops_blank_emails_and_keeps_order() {
        let entries = parse_allow_list(ALLOW_LIST).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].email, "admin@example.com");
        assert_eq!(entries[1].email, "Analyst@Example.com");
    }

    #[test]
    fn test_parse_tolerates_extra_and_missing_columns() {
        let text = "name,email,team\nAdmin,admin@example.com,ops\nShort\n";
        let entries = parse_allow_list(text).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Admin");
        assert_eq!(entries[0].role, "");
    }

    #[test]
    fn test_parse_trims_cells() {
        let text = "email , name , role\n  admin@example.com , Admin , admin \n";
        let entries = parse_allow_list(text).unwrap();

        assert_eq!(entries[0], AuthorizedIdentity::new("admin@example.com", "Admin", "admin"));
    }

    #[test]
    fn test_queries_before_load_are_negative() {
        let store = AuthorizationStore::new(StaticSource::new(ALLOW_LIST));

        assert!(!store.is_loaded());
        assert!(!store.is_authorized("admin@example.com"));
        assert!(store.get_details("admin@example.com").is_none());
        assert!(store.all().is_empty());
    }

    #[tokio::test]
    async fn test_load_then_lookup_case_insensitive() {
        let store = AuthorizationStore::new(StaticSource::new(ALLOW_LIST));

        assert_eq!(store.load().await.unwrap(), 2);
        assert!(store.is_authorized("ADMIN@example.com"));
        assert!(store.is_authorized("analyst@example.com"));
        assert!(!store.is_authorized("nobody@example.com"));

        let details = store.get_details("analyst@EXAMPLE.com").unwrap();
        assert_eq!(details.name, "Analyst");
        assert_eq!(details.role, "viewer");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_unloaded() {
        let store = AuthorizationStore::new(FailingSource);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
        assert!(!store.is_loaded());
        assert!(!store.is_authorized("admin@example.com"));
    }

    #[tokio::test]
    async fn test_failed_reload_clears_previous_entries() {
        let store = AuthorizationStore::new(FlakySource {
            calls: AtomicUsize::new(0),
        });

        store.load().await.unwrap();
        assert!(store.is_authorized("admin@example.com"));

        assert!(store.load().await.is_err());
        assert!(!store.is_loaded());
        assert!(store.all().is_empty());
        assert!(!store.is_authorized("admin@example.com"));
    }

    #[tokio::test]
    async fn test_ensure_loaded_fetches_once() {
        let source = Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
        });
        let store = AuthorizationStore::from_shared(source.clone());

        store.ensure_loaded().await.unwrap();
        store.ensure_loaded().await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
