//! Client for the key-metrics API.
//!
//! The API computes financial metrics for a stock ticker server-side and
//! proxies questions to a financial advisor chat model. This crate only speaks
//! its JSON-over-HTTP contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use metrics_client::{MetricExport, MetricsClient, Ticker};
//!
//! let client = MetricsClient::from_env();
//! let ticker = Ticker::parse("aapl")?;
//!
//! for point in client.debt_to_equity(&ticker).await? {
//!     println!("{}: {}", point.year, point.debt_to_equity);
//! }
//!
//! let export = client.export_csv(MetricExport::CashFlow, &ticker).await?;
//! std::fs::write(&export.file_name, &export.content)?;
//! ```

pub mod error;
pub mod types;

pub use error::{MetricsError, Result};
pub use types::{CsvExport, DebtToEquityPoint, HealthStatus, MetricExport, Ticker, ADVISOR_CONTEXT};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::{ChatRequest, ChatResponse, DebtToEquityResponse, ErrorBody, TickerRequest};

/// Used when `METRICS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone)]
pub struct MetricsClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variable `METRICS_API_URL`.
    pub fn from_env() -> Self {
        let url = std::env::var("METRICS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Yearly debt-to-equity ratios.
    pub async fn debt_to_equity(&self, ticker: &Ticker) -> Result<Vec<DebtToEquityPoint>> {
        let body = TickerRequest {
            ticker: ticker.as_str(),
        };
        let resp: DebtToEquityResponse = self.post_json("/api/debt-to-equity", &body).await?;
        tracing::debug!(ticker = %ticker, years = resp.data.len(), "Fetched debt-to-equity");
        Ok(resp.data)
    }

    /// Download one of the CSV exports.
    pub async fn export_csv(&self, kind: MetricExport, ticker: &Ticker) -> Result<CsvExport> {
        let body = TickerRequest {
            ticker: ticker.as_str(),
        };
        let resp = self
            .client
            .post(self.url(kind.path()))
            .json(&body)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let content = resp.bytes().await?.to_vec();

        let file_name = kind.file_name(ticker, chrono::Utc::now().timestamp_millis());
        tracing::info!(ticker = %ticker, file = %file_name, bytes = content.len(), "Downloaded export");

        Ok(CsvExport { file_name, content })
    }

    /// Ask the financial advisor a question; returns its reply.
    pub async fn chat(&self, message: &str) -> Result<String> {
        let body = ChatRequest {
            message,
            context: ADVISOR_CONTEXT,
        };
        let resp: ChatResponse = self.post_json("/api/chat", &body).await?;
        Ok(resp.response)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let resp = self.client.get(self.url("/api/health")).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-2xx response into an error, keeping the API's own message.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => {
            tracing::warn!(status = status.as_u16(), error = %body.error, "Metrics API error");
            Err(MetricsError::Api {
                status: status.as_u16(),
                message: body.error,
            })
        }
        Err(_) => {
            tracing::warn!(status = status.as_u16(), "Metrics API error without body");
            Err(MetricsError::Status(status.as_u16()))
        }
    }
}
