//! Reusable UI components

mod app_layout;
mod app_nav;
mod chat_panel;
mod loading;
mod redirect;

pub use app_layout::*;
pub use app_nav::*;
pub use chat_panel::*;
pub use loading::*;
pub use redirect::*;
