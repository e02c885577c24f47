//! Saving CSV exports on the user's machine

use base64::Engine;
use metrics_client::CsvExport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// No window, document or body to attach the link to
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    #[error("Browser document unavailable: {0}")]
    NoDocument(&'static str),

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// `data:` URL carrying the CSV content.
pub fn data_url(content: &[u8]) -> String {
    format!(
        "data:text/csv;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(content)
    )
}

/// Trigger a browser download through a temporary `<a download>` element.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn save(export: &CsvExport) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let dom_err = |e: wasm_bindgen::JsValue| {
        DownloadError::Dom(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument("document"))?;
    let body = document.body().ok_or(DownloadError::NoDocument("body"))?;

    let link = document.create_element("a").map_err(dom_err)?;
    link.set_attribute("href", &data_url(&export.content)).map_err(dom_err)?;
    link.set_attribute("download", &export.file_name).map_err(dom_err)?;

    body.append_child(&link).map_err(dom_err)?;
    if let Some(link) = link.dyn_ref::<web_sys::HtmlElement>() {
        link.click();
    }
    body.remove_child(&link).map_err(dom_err)?;

    Ok(())
}

/// Outside the browser the export is written to the working directory.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn save(export: &CsvExport) -> Result<(), DownloadError> {
    std::fs::write(&export.file_name, &export.content)?;
    Ok(())
}
