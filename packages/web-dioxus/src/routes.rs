//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::pages::{Dashboard, Login, NotFound, Profile};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login?:from")]
    Login { from: String },

    // Signed-in routes
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},

        #[route("/profile")]
        Profile {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
