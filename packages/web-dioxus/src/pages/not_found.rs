//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::components::Redirect;
use crate::routes::Route;

/// Unknown paths land on the dashboard
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");

    rsx! {
        Redirect { to: Route::Dashboard {} }
    }
}
