//! Root component: page head plus the allow-list gate around the router

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;

/// Shown in the browser tab and the navigation bar.
pub const APP_NAME: &str = "Key Metrics";

/// Mounts the stylesheet and title, then the router.
///
/// `AuthProvider` sits above the router so every route, `/login` included,
/// sees the restored session. The signed-in pages are gated by `AppLayout`.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "{APP_NAME}" }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
