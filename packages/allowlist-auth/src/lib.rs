//! CSV allow-list authentication.
//!
//! Answers "may this email sign in?" from a small tabular allow-list and keeps
//! the signed-in identity in durable key-value storage so it survives reloads.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use allowlist_auth::{
//!     AuthFacade, AuthorizationStore, HttpSource, LoginOutcome, MemoryStorage, SessionManager,
//! };
//!
//! let store = Arc::new(AuthorizationStore::new(HttpSource::new(
//!     "https://example.com/authorized_users.csv",
//! )));
//! let auth = AuthFacade::new(store, SessionManager::new(MemoryStorage::new()));
//! auth.restore();
//!
//! match auth.login("admin@example.com", "pw12345").await? {
//!     LoginOutcome::Success(user) => println!("welcome {}", user.name),
//!     LoginOutcome::Rejected(reason) => println!("{reason}"),
//! }
//! ```
//!
//! # Layers
//!
//! | Type | Role |
//! |------|------|
//! | [`AuthorizationStore`] | Loads the allow-list once, answers lookups |
//! | [`SessionManager`] | Reads and writes the persisted session |
//! | [`AuthFacade`] | `login` / `logout` / `restore` state machine |
//! | [`guard`] | Admission decision for protected views |

pub mod error;
pub mod facade;
pub mod guard;
pub mod identity;
pub mod session;
pub mod source;
pub mod storage;
pub mod store;

pub use error::{AuthError, Result, StorageError, StoreError};
pub use facade::{AuthFacade, AuthState, LoginOutcome, LoginRejection, MIN_PASSWORD_LEN};
pub use guard::{evaluate, post_login_destination, GuardDecision, DEFAULT_LANDING, LOGIN_PATH};
pub use identity::{AuthorizedIdentity, SessionIdentity};
pub use session::{issue_token, SessionManager, IDENTITY_KEY, TOKEN_KEY};
pub use source::{AllowListSource, StaticSource};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::AuthorizationStore;

#[cfg(feature = "fs")]
pub use source::FileSource;
#[cfg(feature = "http")]
pub use source::HttpSource;
