//! PDF Rasterizer: converts rendered HTML into a paginated PDF.
//!
//! The rasterizer is a trait so the HTTP pipeline can be exercised in tests
//! without a browser install; `AppState` carries it as
//! `Arc<dyn PdfRasterizer>`. The production implementation is
//! `ChromeRasterizer`: one isolated headless-Chrome process per call, torn
//! down unconditionally when the call ends.

pub mod chrome;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use chrome::ChromeRasterizer;

#[derive(Debug, Error)]
pub enum RasterizeError {
    #[error("failed to stage HTML for the browser: {0}")]
    Stage(#[from] std::io::Error),

    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("page load failed: {0}")]
    Navigate(String),

    #[error("PDF export failed: {0}")]
    Export(String),

    #[error("rasterization timed out after {0:?}")]
    Timeout(Duration),

    #[error("rasterization task failed: {0}")]
    Task(String),
}

/// Converts one HTML document into one paginated PDF.
///
/// Implementations must be independent across calls: no shared browser, no
/// cross-request state. Every acquired rendering resource is released before
/// the call returns, success or failure.
#[async_trait]
pub trait PdfRasterizer: Send + Sync {
    async fn rasterize(&self, html: &str) -> Result<Bytes, RasterizeError>;
}
