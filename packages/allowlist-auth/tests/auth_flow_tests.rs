//! End-to-end login/logout/restore flows against an in-memory allow-list.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use allowlist_auth::{
    AllowListSource, AuthFacade, AuthState, AuthorizationStore, KeyValueStorage, LoginOutcome,
    LoginRejection, MemoryStorage, SessionManager, StoreError, IDENTITY_KEY, TOKEN_KEY,
};
use async_trait::async_trait;
use proptest::prelude::*;

const ALLOW_LIST: &str = "email,name,role\nadmin@example.com,Admin,admin\n";

// ============================================================================
// Test Helpers
// ============================================================================

/// Static allow-list that counts how often it was fetched.
struct CountingSource {
    text: String,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            fetches: AtomicUsize::new(0),
        })
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AllowListSource for CountingSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

struct UnreachableSource;

#[async_trait]
impl AllowListSource for UnreachableSource {
    async fn fetch(&self) -> Result<String, StoreError> {
        Err(StoreError::Transport("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}

fn facade_over(source: Arc<dyn AllowListSource>, storage: MemoryStorage) -> AuthFacade<MemoryStorage> {
    let store = Arc::new(AuthorizationStore::from_shared(source));
    AuthFacade::new(store, SessionManager::new(storage))
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_admin_scenario() {
    let auth = facade_over(CountingSource::new(ALLOW_LIST), MemoryStorage::new());
    auth.restore();

    let outcome = auth.login("admin@example.com", "pw12345").await.unwrap();
    assert!(outcome.is_success());
    assert!(auth.is_authenticated());

    auth.logout();

    let outcome = auth.login("admin@example.com", "short").await.unwrap();
    assert_eq!(outcome, LoginOutcome::Rejected(LoginRejection::PasswordTooShort));
    assert_eq!(outcome.error().as_deref(), Some("password too short"));

    let outcome = auth.login("nobody@example.com", "anything1").await.unwrap();
    assert_eq!(outcome, LoginOutcome::Rejected(LoginRejection::NotAuthorized));
    assert_eq!(outcome.error().as_deref(), Some("not authorized"));
}

#[tokio::test]
async fn test_unauthorized_email_rejected_before_password_feedback() {
    let auth = facade_over(CountingSource::new(ALLOW_LIST), MemoryStorage::new());
    auth.restore();

    let outcome = auth.login("nobody@example.com", "x").await.unwrap();
    assert_eq!(outcome, LoginOutcome::Rejected(LoginRejection::NotAuthorized));
}

#[tokio::test]
async fn test_fresh_process_restores_same_identity() {
    let storage = MemoryStorage::new();
    let source = CountingSource::new(ALLOW_LIST);

    let first = facade_over(source.clone(), storage.clone());
    first.restore();
    let LoginOutcome::Success(identity) = first.login("admin@example.com", "pw12345").await.unwrap()
    else {
        panic!("expected login to succeed");
    };

    let second = facade_over(source, storage);
    assert_eq!(second.restore(), AuthState::Authenticated(identity.clone()));
    assert_eq!(second.user(), Some(identity));
}

#[tokio::test]
async fn test_logout_removes_both_keys() {
    let storage = MemoryStorage::new();
    let auth = facade_over(CountingSource::new(ALLOW_LIST), storage.clone());
    auth.restore();
    auth.login("admin@example.com", "pw12345").await.unwrap();

    assert!(storage.contains(TOKEN_KEY));
    assert!(storage.contains(IDENTITY_KEY));

    auth.logout();

    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(IDENTITY_KEY));
    assert!(!auth.is_authenticated());
}

#[test]
fn test_restore_from_storage_makes_no_fetch() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "mock-jwt-token").unwrap();
    storage
        .set(
            IDENTITY_KEY,
            r#"{"id":"1","email":"admin@example.com","name":"Admin","role":"admin"}"#,
        )
        .unwrap();

    let source = CountingSource::new(ALLOW_LIST);
    let auth = facade_over(source.clone(), storage);
    auth.restore();

    assert!(!auth.loading());
    assert!(auth.is_authenticated());
    assert_eq!(source.fetches(), 0);
}

#[test]
fn test_corrupt_storage_restores_unauthenticated() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "mock-jwt-token").unwrap();
    storage.set(IDENTITY_KEY, "][").unwrap();

    let auth = facade_over(CountingSource::new(ALLOW_LIST), storage);
    auth.restore();

    assert!(!auth.loading());
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_unreachable_allow_list_is_an_error() {
    let auth = facade_over(Arc::new(UnreachableSource), MemoryStorage::new());
    auth.restore();

    let result = auth.login("admin@example.com", "pw12345").await;
    assert!(result.is_err());
    assert!(!auth.is_authenticated());
    assert!(!auth.store().is_loaded());
}

#[tokio::test]
async fn test_allow_list_loaded_once_across_logins() {
    let source = CountingSource::new(ALLOW_LIST);
    let auth = facade_over(source.clone(), MemoryStorage::new());
    auth.restore();

    auth.login("nobody@example.com", "pw12345").await.unwrap();
    auth.login("admin@example.com", "pw12345").await.unwrap();

    assert_eq!(source.fetches(), 1);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_unlisted_email_never_logs_in(local in "[a-z0-9]{1,12}", password in ".{0,20}") {
        let email = format!("{local}@unlisted.example");
        let auth = facade_over(CountingSource::new(ALLOW_LIST), MemoryStorage::new());
        auth.restore();

        let outcome = runtime().block_on(auth.login(&email, &password)).unwrap();
        prop_assert_eq!(outcome, LoginOutcome::Rejected(LoginRejection::NotAuthorized));
        prop_assert!(!auth.is_authenticated());
    }

    #[test]
    fn prop_password_length_decides_for_listed_email(password in "[a-zA-Z0-9]{0,12}") {
        let auth = facade_over(CountingSource::new(ALLOW_LIST), MemoryStorage::new());
        auth.restore();

        let outcome = runtime().block_on(auth.login("admin@example.com", &password)).unwrap();
        prop_assert_eq!(outcome.is_success(), password.len() >= 6);
        prop_assert_eq!(auth.is_authenticated(), password.len() >= 6);
    }
}
