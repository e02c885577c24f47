//! Application pages

mod dashboard;
mod login;
mod not_found;
mod profile;

pub use dashboard::*;
pub use login::*;
pub use not_found::*;
pub use profile::*;
