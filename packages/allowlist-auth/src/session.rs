//! Session manager: the persisted half of the signed-in state.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::identity::SessionIdentity;
use crate::storage::KeyValueStorage;

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-serialized [`SessionIdentity`].
pub const IDENTITY_KEY: &str = "userData";

/// Reads and writes the two session entries.
///
/// Both entries must be present for a session to count. There is no expiry:
/// a restored session is trusted until [`clear`](Self::clear).
pub struct SessionManager<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Rebuild the identity from storage.
    ///
    /// Missing, empty or unreadable entries mean "not signed in"; nothing here
    /// is ever surfaced as an error.
    pub fn restore(&self) -> Option<SessionIdentity> {
        let token = self.read(TOKEN_KEY)?;
        let raw = self.read(IDENTITY_KEY)?;

        if token.is_empty() || raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<SessionIdentity>(&raw) {
            Ok(identity) => {
                debug!(email = %identity.email, "Session restored");
                Some(identity)
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable stored session");
                None
            }
        }
    }

    pub fn persist(&self, identity: &SessionIdentity, token: &str) -> Result<(), StorageError> {
        let raw = serde_json::to_string(identity)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(IDENTITY_KEY, &raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(IDENTITY_KEY)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read session storage");
                None
            }
        }
    }
}

/// A new opaque session token. Not a credential; only its presence matters.
pub fn issue_token() -> String {
    format!("session-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            id: "7c1f".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_persist_then_restore() {
        let storage = MemoryStorage::new();
        let sessions = SessionManager::new(storage.clone());

        sessions.persist(&identity(), "tok").unwrap();

        let restored = SessionManager::new(storage).restore();
        assert_eq!(restored, Some(identity()));
    }

    #[test]
    fn test_restore_requires_both_keys() {
        let storage = MemoryStorage::new();
        let sessions = SessionManager::new(storage.clone());

        storage
            .set(IDENTITY_KEY, &serde_json::to_string(&identity()).unwrap())
            .unwrap();
        assert!(sessions.restore().is_none());

        storage.remove(IDENTITY_KEY).unwrap();
        storage.set(TOKEN_KEY, "tok").unwrap();
        assert!(sessions.restore().is_none());
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let storage = MemoryStorage::new();
        let sessions = SessionManager::new(storage.clone());

        sessions.persist(&identity(), "").unwrap();
        assert!(sessions.restore().is_none());
    }

    #[test]
    fn test_corrupt_identity_restores_nothing() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(IDENTITY_KEY, "{not json").unwrap();

        assert!(SessionManager::new(storage).restore().is_none());
    }

    #[test]
    fn test_old_shape_with_extra_fields_still_restores() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "mock-jwt-token").unwrap();
        storage
            .set(
                IDENTITY_KEY,
                r#"{"id":"1","email":"admin@example.com","name":"Admin","role":"admin","theme":"dark"}"#,
            )
            .unwrap();

        let restored = SessionManager::new(storage).restore().unwrap();
        assert_eq!(restored.email, "admin@example.com");
    }

    #[test]
    fn test_shape_missing_fields_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "mock-jwt-token").unwrap();
        storage
            .set(IDENTITY_KEY, r#"{"id":1,"email":"admin@example.com","name":"Admin"}"#)
            .unwrap();

        assert!(SessionManager::new(storage).restore().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let sessions = SessionManager::new(storage.clone());

        sessions.persist(&identity(), "tok").unwrap();
        sessions.clear().unwrap();

        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(IDENTITY_KEY));
    }

    #[test]
    fn test_issued_tokens_are_unique() {
        assert_ne!(issue_token(), issue_token());
    }
}
