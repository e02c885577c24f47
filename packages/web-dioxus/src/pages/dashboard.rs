//! Metrics dashboard

use dioxus::prelude::*;
use metrics_client::{DebtToEquityPoint, MetricExport, MetricsClient, MetricsError, Ticker};

use crate::config;
use crate::download;

const DEBT_TO_EQUITY_FAILED: &str = "Failed to calculate debt-to-equity ratio";

/// What the dashboard is currently waiting on
#[derive(Clone, Copy, Debug, PartialEq)]
enum Busy {
    Calculating,
    Exporting(MetricExport),
}

/// Text for a failed request: the API's own message, else the fallback.
fn failure_message(error: &MetricsError, fallback: &str) -> String {
    match error {
        MetricsError::EmptyTicker => error.to_string(),
        _ => error
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
    }
}

/// Dashboard page with the ticker lookup and CSV exports
#[component]
pub fn Dashboard() -> Element {
    let client = use_signal(|| MetricsClient::new(config::get().api_base_url.clone()));
    let mut ticker_input = use_signal(String::new);
    let mut rows = use_signal(Vec::<DebtToEquityPoint>::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| None::<Busy>);

    let handle_calculate = move |_| {
        if busy.peek().is_some() {
            return;
        }
        let ticker = match Ticker::parse(&ticker_input.read()) {
            Ok(ticker) => ticker,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let client = client.peek().clone();
        spawn(async move {
            busy.set(Some(Busy::Calculating));
            error.set(None);

            match client.debt_to_equity(&ticker).await {
                Ok(data) => rows.set(data),
                Err(e) => {
                    tracing::warn!(ticker = %ticker, error = %e, "Debt-to-equity request failed");
                    rows.set(Vec::new());
                    error.set(Some(failure_message(&e, DEBT_TO_EQUITY_FAILED)));
                }
            }

            busy.set(None);
        });
    };

    let mut handle_export = move |kind: MetricExport| {
        if busy.peek().is_some() {
            return;
        }
        let ticker = match Ticker::parse(&ticker_input.read()) {
            Ok(ticker) => ticker,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let client = client.peek().clone();
        spawn(async move {
            busy.set(Some(Busy::Exporting(kind)));
            error.set(None);

            match client.export_csv(kind, &ticker).await {
                Ok(export) => {
                    if let Err(e) = download::save(&export) {
                        tracing::error!(file = %export.file_name, error = %e, "Could not save export");
                        error.set(Some(kind.fallback_error()));
                    } else {
                        tracing::info!(file = %export.file_name, "Export saved");
                    }
                }
                Err(e) => {
                    tracing::warn!(ticker = %ticker, export = kind.label(), error = %e, "Export failed");
                    error.set(Some(failure_message(&e, &kind.fallback_error())));
                }
            }

            busy.set(None);
        });
    };

    let is_busy = busy().is_some();

    rsx! {
        div {
            class: "space-y-6",

            // Header
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Key Metrics" }
                p { class: "text-gray-600", "Look up a company's fundamentals by ticker symbol." }
            }

            // Ticker lookup
            div {
                class: "bg-white rounded-lg shadow p-6",
                label {
                    r#for: "ticker",
                    class: "block text-sm font-medium text-gray-700 mb-2",
                    "Stock Ticker"
                }
                div {
                    class: "flex gap-3",
                    input {
                        id: "ticker",
                        r#type: "text",
                        value: "{ticker_input}",
                        oninput: move |e| ticker_input.set(e.value()),
                        placeholder: "e.g. AAPL",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md uppercase focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        disabled: is_busy
                    }
                    button {
                        class: "bg-emerald-700 text-white px-4 py-2 rounded-md hover:bg-emerald-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_busy,
                        onclick: handle_calculate,
                        if busy() == Some(Busy::Calculating) { "Calculating..." } else { "Calculate Debt-to-Equity" }
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "mt-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                // Exports
                div {
                    class: "mt-6",
                    h2 { class: "text-sm font-semibold text-gray-700 mb-3", "Download CSV" }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                        for kind in MetricExport::variants().iter().copied() {
                            button {
                                key: "{kind.file_prefix()}",
                                class: "border border-emerald-700 text-emerald-800 px-3 py-2 rounded-md text-sm hover:bg-emerald-50 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_busy,
                                onclick: move |_| handle_export(kind),
                                if busy() == Some(Busy::Exporting(kind)) {
                                    "Generating..."
                                } else {
                                    "{kind.label()}"
                                }
                            }
                        }
                    }
                }
            }

            // Results
            if !rows().is_empty() {
                div {
                    class: "bg-white rounded-lg shadow overflow-hidden",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Year" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Stock" }
                                th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase", "Debt-to-Equity" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for point in rows() {
                                tr {
                                    key: "{point.year}",
                                    td { class: "px-6 py-3 text-sm text-gray-900", "{point.year}" }
                                    td { class: "px-6 py-3 text-sm text-gray-600", "{point.stock}" }
                                    td { class: "px-6 py-3 text-sm text-right font-mono", {format!("{:.2}", point.debt_to_equity)} }
                                }
                            }
                        }
                    }
                }
            }

            // About
            div {
                class: "bg-emerald-50 border border-emerald-200 rounded-lg p-6",
                h2 { class: "font-semibold text-emerald-900 mb-2", "Investing the Peter Lynch way" }
                ul {
                    class: "list-disc list-inside text-sm text-emerald-900 space-y-1",
                    li { "Know what you own, and why you own it." }
                    li { "Favor companies with low debt relative to equity." }
                    li { "Look for steady cash flow and earnings growth." }
                    li { "A high return on equity points to efficient management." }
                }
            }
        }
    }
}
