//! Error types for the metrics client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// Ticker was blank after trimming
    #[error("Please enter a ticker symbol")]
    EmptyTicker,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response carrying an `{"error": ...}` body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Non-2xx response without a readable error body
    #[error("Request failed with status {0}")]
    Status(u16),
}

impl MetricsError {
    /// The message the API itself reported, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            MetricsError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
