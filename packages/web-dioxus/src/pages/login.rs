//! Login page

use std::str::FromStr;

use allowlist_auth::{post_login_destination, LoginOutcome, DEFAULT_LANDING};
use dioxus::prelude::*;

use crate::auth::{use_auth, validate_credentials, UNEXPECTED_ERROR};
use crate::components::Redirect;
use crate::routes::Route;

/// Login page
///
/// `from` is the page the visitor was sent away from, if any.
#[component]
pub fn Login(from: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Dashboard {} }
        };
    }

    let handle_submit = move |_| {
        let email_value = email().trim().to_string();
        let password_value = password();

        if let Err(e) = validate_credentials(&email_value, &password_value) {
            error.set(Some(e.to_string()));
            return;
        }

        let auth = auth.clone();
        let destination = landing_route(&from);

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match auth.login(&email_value, &password_value).await {
                Ok(LoginOutcome::Success(_)) => {
                    navigator.replace(destination);
                }
                Ok(outcome) => error.set(outcome.error()),
                Err(e) => {
                    tracing::error!(error = %e, "Login failed");
                    error.set(Some(UNEXPECTED_ERROR.to_string()));
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Welcome Back" }
                    p { class: "text-gray-600 text-sm", "Please sign in to your account" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            r#for: "email",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email Address"
                        }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "Enter your email",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            r#for: "password",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            placeholder: "Enter your password",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-emerald-700 text-white py-2 px-4 rounded-md hover:bg-emerald-800 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing In..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}

/// Where to go after a successful login.
fn landing_route(from: &str) -> Route {
    let target = post_login_destination(Some(from), DEFAULT_LANDING);
    Route::from_str(&target).unwrap_or(Route::Dashboard {})
}
