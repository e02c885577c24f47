//! Request and response types for the metrics API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Context tag the advisor endpoint expects on every chat message.
pub const ADVISOR_CONTEXT: &str = "financial_advisor";

// =============================================================================
// Ticker
// =============================================================================

/// Normalized (trimmed, upper-case) stock ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(MetricsError::EmptyTicker);
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TickerRequest<'a> {
    pub ticker: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Debt-to-equity
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtToEquityPoint {
    pub year: String,
    pub debt_to_equity: f64,
    pub stock: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DebtToEquityResponse {
    pub data: Vec<DebtToEquityPoint>,
}

// =============================================================================
// CSV exports
// =============================================================================

/// Metrics the API can export as a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricExport {
    DebtToEquity,
    CashFlow,
    EarningsGrowth,
    ReturnOnEquity,
}

impl MetricExport {
    pub fn variants() -> &'static [MetricExport] {
        &[
            MetricExport::DebtToEquity,
            MetricExport::CashFlow,
            MetricExport::EarningsGrowth,
            MetricExport::ReturnOnEquity,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            MetricExport::DebtToEquity => "/api/debt-to-equity-csv",
            MetricExport::CashFlow => "/api/cash-flow-csv",
            MetricExport::EarningsGrowth => "/api/cash-earnings-growth-csv",
            MetricExport::ReturnOnEquity => "/api/roe-csv",
        }
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            MetricExport::DebtToEquity => "debt_to_equity",
            MetricExport::CashFlow => "cash_flow",
            MetricExport::EarningsGrowth => "Earnings_Growth",
            MetricExport::ReturnOnEquity => "ROE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricExport::DebtToEquity => "Debt-to-Equity",
            MetricExport::CashFlow => "Cash Flow",
            MetricExport::EarningsGrowth => "Cash Earnings Growth",
            MetricExport::ReturnOnEquity => "ROE",
        }
    }

    /// Shown when the API fails without saying why.
    pub fn fallback_error(&self) -> String {
        format!("Failed to download {} CSV", self.label())
    }

    /// `{prefix}_{TICKER}_{millis}.csv`
    pub fn file_name(&self, ticker: &Ticker, timestamp_millis: i64) -> String {
        format!("{}_{}_{}.csv", self.file_prefix(), ticker, timestamp_millis)
    }
}

/// A downloaded CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: Vec<u8>,
}

// =============================================================================
// Chat
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
    pub context: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub response: String,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
