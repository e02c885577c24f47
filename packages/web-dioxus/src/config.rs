//! Build-time configuration for the browser bundle.

use std::sync::OnceLock;

use metrics_client::DEFAULT_BASE_URL;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Where the allow-list is served from unless `ALLOW_LIST_URL` says otherwise.
pub const DEFAULT_ALLOW_LIST_URL: &str = "/authorized_users.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the metrics/chat API
    pub api_base_url: String,
    /// Location of `authorized_users.csv`
    pub allow_list_url: String,
}

impl AppConfig {
    /// Read `METRICS_API_URL` and `ALLOW_LIST_URL` as they were at compile time.
    ///
    /// A browser bundle has no process environment, so values are baked in.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("METRICS_API_URL"), option_env!("ALLOW_LIST_URL"))
    }

    fn from_values(api_base_url: Option<&str>, allow_list_url: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            api_base_url: pick(api_base_url, DEFAULT_BASE_URL),
            allow_list_url: pick(allow_list_url, DEFAULT_ALLOW_LIST_URL),
        }
    }
}

/// Install the configuration. Call this once at startup.
pub fn init(config: AppConfig) {
    CONFIG.set(config).ok();
}

/// The installed configuration, or the build-time one if `init` was skipped.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_build_env)
}
