//! Account overview

use dioxus::prelude::*;

use crate::app::APP_NAME;
use crate::auth::use_auth;

/// Profile page showing the signed-in identity
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();

    let Some(user) = auth.user.read().clone() else {
        return rsx! {};
    };

    let raw = serde_json::to_string_pretty(&user).unwrap_or_default();
    let role = if user.role.is_empty() { "user" } else { user.role.as_str() };

    rsx! {
        div {
            class: "space-y-6",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Welcome, {user.display_name()}" }
                p { class: "text-gray-600", "You are signed in to {APP_NAME}." }
            }

            div {
                class: "bg-white rounded-lg shadow p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Account Details" }
                dl {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    DetailRow { label: "Name", value: user.name.clone() }
                    DetailRow { label: "Email", value: user.email.clone() }
                    DetailRow { label: "Role", value: role.to_string() }
                    DetailRow { label: "Session", value: user.id.clone() }
                }
            }

            div {
                class: "bg-white rounded-lg shadow p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Stored Session" }
                pre {
                    class: "bg-gray-50 rounded p-4 text-xs text-gray-700 overflow-x-auto",
                    "{raw}"
                }
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "text-sm font-medium text-gray-500", "{label}" }
            dd { class: "mt-1 text-sm text-gray-900", "{value}" }
        }
    }
}
