//! Loading indicators

use dioxus::prelude::*;

const BOUNCE_DELAYS: [&str; 3] = ["0s", "0.1s", "0.2s"];

/// Centered spinner with a caption, used while the session is restored
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4",
            BouncingDots { dot_class: "w-3 h-3 bg-emerald-500" }
            p { class: "text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline indicator for a pending advisor reply
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        BouncingDots { dot_class: "w-2 h-2 bg-stone-400" }
    }
}

#[component]
fn BouncingDots(dot_class: &'static str) -> Element {
    rsx! {
        div {
            class: "flex space-x-1",
            for delay in BOUNCE_DELAYS {
                div {
                    class: "{dot_class} rounded-full animate-bounce",
                    style: "animation-delay: {delay}"
                }
            }
        }
    }
}
