//! Headless-Chrome rasterizer: a fresh isolated browser per call.
//!
//! The `headless_chrome` crate is synchronous, so the launch → navigate →
//! export sequence runs inside `tokio::task::spawn_blocking` while the async
//! wrapper owns the timeout. Browser process and staged temp file are both
//! released by `Drop` on every exit path.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::debug;

use crate::pdf::{PdfRasterizer, RasterizeError};

/// A4 paper in inches, the one page format the service exports.
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.7;

pub struct ChromeRasterizer {
    timeout: Duration,
}

impl ChromeRasterizer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl PdfRasterizer for ChromeRasterizer {
    async fn rasterize(&self, html: &str) -> Result<Bytes, RasterizeError> {
        let html = html.to_owned();
        let timeout = self.timeout;

        let task = tokio::task::spawn_blocking(move || rasterize_blocking(&html, timeout));

        let joined = tokio::time::timeout(timeout, task)
            .await
            .map_err(|_| RasterizeError::Timeout(timeout))?;
        let pdf = joined.map_err(|e| RasterizeError::Task(e.to_string()))??;

        Ok(Bytes::from(pdf))
    }
}

/// Blocking launch → navigate → export sequence.
///
/// The browser's idle watchdog is set to the same deadline as the async
/// timeout: the blocking task itself cannot be cancelled, but a Chrome
/// process stuck past the deadline is still reaped.
fn rasterize_blocking(html: &str, timeout: Duration) -> Result<Vec<u8>, RasterizeError> {
    // The document goes to disk and is loaded as a plain local file, so once
    // the load event fires there is no network activity left to settle.
    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".html")
        .tempfile()?;
    staged.write_all(html.as_bytes())?;
    staged.flush()?;

    let launch_options = LaunchOptions::default_builder()
        .idle_browser_timeout(timeout)
        .build()
        .map_err(|e| RasterizeError::Launch(e.to_string()))?;
    let browser =
        Browser::new(launch_options).map_err(|e| RasterizeError::Launch(e.to_string()))?;

    let tab = browser
        .new_tab()
        .map_err(|e| RasterizeError::Launch(e.to_string()))?;

    let url = format!("file://{}", staged.path().display());
    tab.navigate_to(&url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| RasterizeError::Navigate(e.to_string()))?;

    let pdf = tab
        .print_to_pdf(Some(pdf_options()))
        .map_err(|e| RasterizeError::Export(e.to_string()))?;

    debug!("Exported {} bytes of PDF", pdf.len());
    Ok(pdf)
    // browser and staged drop here: Chrome killed, temp file removed
}

/// Fixed export options: A4 paper with background graphics on.
fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Theme, ThemeEngine};

    #[test]
    fn test_pdf_options_fix_a4_with_background() {
        let options = pdf_options();
        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.paper_width, Some(A4_WIDTH_IN));
        assert_eq!(options.paper_height, Some(A4_HEIGHT_IN));
    }

    // Needs a local Chrome/Chromium install; run with `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_generate_scenario_end_to_end() {
        let engine = ThemeEngine::new(Theme::Even).unwrap();
        let html = engine
            .render(&serde_json::json!({"basics": {"name": "Ada Lovelace"}}))
            .unwrap();

        let rasterizer = ChromeRasterizer::new(Duration::from_secs(60));
        let pdf = rasterizer.rasterize(&html).await.unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        let text = pdf_extract::extract_text_from_mem(&pdf).unwrap();
        assert!(text.contains("Ada Lovelace"));
    }
}
