//! Authentication: allow-list login and the persisted browser session

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser;
mod context;
mod form;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use browser::*;
pub use context::*;
pub use form::*;
