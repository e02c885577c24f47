//! Key Metrics - Dioxus Web Application
//!
//! Single-page app: users on the CSV allow-list sign in, then look up
//! financial metrics for a stock ticker and chat with the advisor service.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! METRICS_API_URL=https://metrics.example.com dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod download;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging
    #[cfg(feature = "web")]
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }

    #[cfg(not(feature = "web"))]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = config::AppConfig::from_build_env();
    tracing::info!(api = %config.api_base_url, allow_list = %config.allow_list_url, "Starting {}", app::APP_NAME);
    config::init(config);

    dioxus::launch(app::App);
}
