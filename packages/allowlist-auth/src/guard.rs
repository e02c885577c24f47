//! Route guard decisions for protected views.

/// Path of the login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Where a successful login lands when there is nowhere better to go.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// What a protected view should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restore has not finished; show a placeholder and decide nothing yet.
    Pending,
    Admit,
    /// Send the visitor to login, remembering where they were headed.
    RedirectToLogin { from: String },
}

pub fn evaluate(is_authenticated: bool, loading: bool, requested: &str) -> GuardDecision {
    if loading {
        GuardDecision::Pending
    } else if is_authenticated {
        GuardDecision::Admit
    } else {
        GuardDecision::RedirectToLogin {
            from: requested.to_string(),
        }
    }
}

/// Pick the post-login location from the remembered `from`.
///
/// Only same-origin absolute paths are honored, and never the login page
/// itself; anything else falls back to `fallback`.
pub fn post_login_destination(from: Option<&str>, fallback: &str) -> String {
    match from.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !is_login_path(path) =>
        {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}

fn is_login_path(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare.trim_end_matches('/') == LOGIN_PATH
}
