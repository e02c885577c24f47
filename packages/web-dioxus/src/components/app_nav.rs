//! Top navigation bar for signed-in pages

use dioxus::prelude::*;

use crate::app::APP_NAME;
use crate::auth::use_auth;
use crate::routes::Route;

/// Navigation bar with a greeting and logout
#[component]
pub fn AppNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let greeting = auth
        .user
        .read()
        .as_ref()
        .map(|user| format!("Welcome, {}", user.display_name()));

    let handle_logout = move |_| {
        auth.logout();
        navigator.push(Route::Login { from: String::new() });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                // Brand
                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xl font-bold text-emerald-700",
                        "{APP_NAME}"
                    }

                    // Nav links
                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Dashboard {}, label: "Dashboard" }
                        NavLink { to: Route::Profile {}, label: "Profile" }
                    }
                }

                // User menu
                div {
                    class: "flex items-center gap-4",
                    if let Some(greeting) = greeting {
                        span { class: "text-sm text-gray-600", "{greeting}" }
                    }
                    button {
                        class: "text-sm text-white bg-red-600 hover:bg-red-700 px-3 py-1.5 rounded",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-emerald-100 text-emerald-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
