//! Authentication context provider

use std::sync::Arc;

use allowlist_auth::{
    AllowListSource, AuthFacade, AuthorizationStore, LoginOutcome, SessionIdentity, SessionManager,
};
use dioxus::prelude::*;

use crate::config;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub type AppStorage = super::BrowserStorage;
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub type AppStorage = allowlist_auth::MemoryStorage;

pub type AppAuth = AuthFacade<AppStorage>;

/// Authentication context that provides user state to the entire app
///
/// The facade owns the real state; the signals mirror it so components
/// re-render when it changes.
#[derive(Clone)]
pub struct AuthContext {
    facade: Arc<AppAuth>,
    /// Current authenticated user (if any)
    pub user: Signal<Option<SessionIdentity>>,
    /// Whether the stored session is still being restored
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Restore the session saved by a previous visit
    pub fn restore(&self) {
        self.facade.restore();
        self.sync();
    }

    pub async fn login(&self, email: &str, password: &str) -> allowlist_auth::Result<LoginOutcome> {
        let outcome = self.facade.login(email, password).await;
        self.sync();
        outcome
    }

    pub fn logout(&self) {
        self.facade.logout();
        self.sync();
    }

    fn sync(&self) {
        let mut user = self.user;
        let mut loading = self.loading;
        user.set(self.facade.user());
        loading.set(self.facade.loading());
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let user = use_signal(|| None::<SessionIdentity>);
    let loading = use_signal(|| true);

    // Create and provide context
    let auth = use_context_provider(|| AuthContext {
        facade: build_facade(),
        user,
        loading,
    });

    // Load initial auth state
    use_effect(move || auth.restore());

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

fn build_facade() -> Arc<AppAuth> {
    let source = allow_list_source(&config::get().allow_list_url);
    let store = Arc::new(AuthorizationStore::from_shared(source));
    Arc::new(AuthFacade::new(store, SessionManager::new(AppStorage::default())))
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn allow_list_source(url: &str) -> Arc<dyn AllowListSource> {
    Arc::new(super::BrowserSource::new(url))
}

/// Outside the browser a relative location has no origin to resolve
/// against, so it is read from the bundled `public/` assets instead.
#[cfg(not(target_arch = "wasm32"))]
fn allow_list_source(url: &str) -> Arc<dyn AllowListSource> {
    if is_absolute_url(url) {
        Arc::new(allowlist_auth::HttpSource::new(url))
    } else {
        Arc::new(allowlist_auth::FileSource::new(bundled_asset_path(url)))
    }
}

#[cfg(all(not(feature = "web"), target_arch = "wasm32"))]
fn allow_list_source(url: &str) -> Arc<dyn AllowListSource> {
    Arc::new(allowlist_auth::HttpSource::new(url))
}

#[cfg(not(target_arch = "wasm32"))]
fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// `/authorized_users.csv` -> `<crate>/public/authorized_users.csv`
#[cfg(not(target_arch = "wasm32"))]
fn bundled_asset_path(url: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join(url.trim_start_matches('/'))
}
