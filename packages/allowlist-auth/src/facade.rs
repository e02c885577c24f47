//! Auth facade: the login/logout state machine the views talk to.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::identity::SessionIdentity;
use crate::session::{issue_token, SessionManager};
use crate::storage::KeyValueStorage;
use crate::store::AuthorizationStore;

/// Shortest password accepted by [`AuthFacade::login`].
pub const MIN_PASSWORD_LEN: usize = 6;

/// Where the facade is in its lifecycle.
///
/// `Uninitialized -> Restoring -> {Authenticated, Unauthenticated}`, then
/// `Authenticated <-> Unauthenticated` through login and logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Uninitialized,
    Restoring,
    Authenticated(SessionIdentity),
    Unauthenticated,
}

impl AuthState {
    pub fn is_settled(&self) -> bool {
        matches!(self, AuthState::Authenticated(_) | AuthState::Unauthenticated)
    }
}

/// Expected reasons a login does not go through. `Display` is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginRejection {
    #[error("not authorized")]
    NotAuthorized,

    /// Email passed the allow-list check but its row could not be read back.
    #[error("user data not found")]
    UserDataNotFound,

    #[error("password too short")]
    PasswordTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(SessionIdentity),
    Rejected(LoginRejection),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    /// Message for a rejected login, `None` on success.
    pub fn error(&self) -> Option<String> {
        match self {
            LoginOutcome::Success(_) => None,
            LoginOutcome::Rejected(reason) => Some(reason.to_string()),
        }
    }
}

/// Orchestrates the [`AuthorizationStore`] and [`SessionManager`].
///
/// Overlapping `login` calls are not serialized: each may reload the store
/// and each writes the session, so the last write wins.
pub struct AuthFacade<S> {
    store: Arc<AuthorizationStore>,
    sessions: SessionManager<S>,
    state: RwLock<AuthState>,
}

impl<S: KeyValueStorage> AuthFacade<S> {
    pub fn new(store: Arc<AuthorizationStore>, sessions: SessionManager<S>) -> Self {
        Self {
            store,
            sessions,
            state: RwLock::new(AuthState::Uninitialized),
        }
    }

    /// Run the one-time restore from storage. Never touches the allow-list.
    ///
    /// Only the first call reads storage; later calls return the current state.
    pub fn restore(&self) -> AuthState {
        {
            let mut state = self.state.write();
            if *state != AuthState::Uninitialized {
                return state.clone();
            }
            *state = AuthState::Restoring;
        }

        let next = match self.sessions.restore() {
            Some(identity) => AuthState::Authenticated(identity),
            None => AuthState::Unauthenticated,
        };

        let mut state = self.state.write();
        // A login that finished while restoring wins over the stored session.
        if *state == AuthState::Restoring {
            *state = next;
        }
        state.clone()
    }

    /// Check `email` against the allow-list and start a session.
    ///
    /// The allow-list is loaded on first use. The authorization check always
    /// runs before the password check.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        self.store.ensure_loaded().await?;

        if !self.store.is_authorized(email) {
            info!(email, "Login rejected: not on allow-list");
            return Ok(LoginOutcome::Rejected(LoginRejection::NotAuthorized));
        }

        let Some(details) = self.store.get_details(email) else {
            error!(email, "Allow-listed email has no details");
            return Ok(LoginOutcome::Rejected(LoginRejection::UserDataNotFound));
        };

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(LoginOutcome::Rejected(LoginRejection::PasswordTooShort));
        }

        let identity = SessionIdentity::from_authorized(&details);
        self.sessions.persist(&identity, &issue_token())?;
        *self.state.write() = AuthState::Authenticated(identity.clone());

        info!(email = %identity.email, role = %identity.role, "User logged in");
        Ok(LoginOutcome::Success(identity))
    }

    /// End the session. Always succeeds; storage failures are only logged.
    pub fn logout(&self) {
        if let Err(e) = self.sessions.clear() {
            warn!(error = %e, "Failed to clear stored session");
        }
        *self.state.write() = AuthState::Unauthenticated;
        info!("User logged out");
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), AuthState::Authenticated(_))
    }

    /// True until the initial restore has finished.
    pub fn loading(&self) -> bool {
        !self.state.read().is_settled()
    }

    pub fn user(&self) -> Option<SessionIdentity> {
        match &*self.state.read() {
            AuthState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    pub fn store(&self) -> &Arc<AuthorizationStore> {
        &self.store
    }

    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use crate::storage::MemoryStorage;

    fn facade() -> AuthFacade<MemoryStorage> {
        let store = Arc::new(AuthorizationStore::new(StaticSource::new(
            "email,name,role\nadmin@example.com,Admin,admin\n",
        )));
        AuthFacade::new(store, SessionManager::new(MemoryStorage::new()))
    }

    #[test]
    fn test_starts_uninitialized_and_loading() {
        let auth = facade();
        assert_eq!(auth.state(), AuthState::Uninitialized);
        assert!(auth.loading());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_restore_settles_once() {
        let auth = facade();

        assert_eq!(auth.restore(), AuthState::Unauthenticated);
        assert!(!auth.loading());

        // Storage written after the first restore is not picked up again.
        let identity = SessionIdentity {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        };
        auth.sessions().persist(&identity, "tok").unwrap();
        assert_eq!(auth.restore(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_before_restore_is_kept() {
        let auth = facade();

        let outcome = auth.login("admin@example.com", "pw12345").await.unwrap();
        assert!(outcome.is_success());

        assert!(matches!(auth.restore(), AuthState::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_rejection_messages() {
        let auth = facade();
        auth.restore();

        let outcome = auth.login("nobody@example.com", "whatever").await.unwrap();
        assert_eq!(outcome.error().as_deref(), Some("not authorized"));

        let outcome = auth.login("admin@example.com", "12345").await.unwrap();
        assert_eq!(outcome.error().as_deref(), Some("password too short"));
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_password_length_counts_characters() {
        let auth = facade();
        auth.restore();

        // Six characters, more than six bytes.
        let outcome = auth.login("admin@example.com", "pässwö").await.unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_user_carries_allow_list_details() {
        let auth = facade();
        auth.restore();

        auth.login("ADMIN@example.com", "pw12345").await.unwrap();

        let user = auth.user().unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.name, "Admin");
        assert_eq!(user.role, "admin");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_logout_resets_state() {
        let auth = facade();
        auth.restore();
        auth.login("admin@example.com", "pw12345").await.unwrap();

        auth.logout();

        assert_eq!(auth.state(), AuthState::Unauthenticated);
        assert!(auth.user().is_none());
        assert!(!auth.loading());
    }
}
