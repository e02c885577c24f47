//! Layout for signed-in pages, guarded by the auth state

use allowlist_auth::{guard, GuardDecision};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use crate::state::ChatState;
use super::{AppNav, ChatPanel, LoadingSpinner, Redirect};

/// Layout component that provides navigation, the advisor chat and auth protection
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    // Create chat state for the signed-in pages
    let chat_state = use_context_provider(ChatState::new);

    match guard::evaluate(auth.is_authenticated(), auth.is_loading(), &route.to_string()) {
        GuardDecision::Pending => rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner { label: "Restoring your session..." }
            }
        },
        GuardDecision::RedirectToLogin { from } => rsx! {
            Redirect { to: Route::Login { from } }
        },
        GuardDecision::Admit => rsx! {
            div {
                class: "min-h-screen bg-gray-100",

                // Navigation
                AppNav {}

                // Main content
                main {
                    class: "p-6",
                    Outlet::<Route> {}
                }

                // Chat panel (floating)
                ChatPanel {
                    is_open: chat_state.is_open.read().clone(),
                    on_close: move |_| chat_state.close()
                }

                // Chat toggle button (FAB)
                button {
                    class: "fixed bottom-6 right-6 w-14 h-14 bg-emerald-600 text-white rounded-full shadow-lg hover:bg-emerald-700 transition-colors flex items-center justify-center z-40",
                    aria_label: "Toggle Financial AI Chat",
                    onclick: move |_| chat_state.toggle(),
                    span { class: "text-2xl", "\u{1F4AC}" }
                }
            }
        },
    }
}
