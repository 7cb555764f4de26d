use std::sync::Arc;

use crate::config::Config;
use crate::pdf::PdfRasterizer;
use crate::render::ThemeEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Theme registry with the bundled theme compiled at startup.
    pub theme: Arc<ThemeEngine>,
    /// Pluggable PDF backend. Default: ChromeRasterizer. Tests swap in stubs.
    pub rasterizer: Arc<dyn PdfRasterizer>,
}
