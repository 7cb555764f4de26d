mod config;
mod errors;
mod generation;
mod pdf;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pdf::ChromeRasterizer;
use crate::render::ThemeEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (all settings have defaults)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Generator API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the bundled theme up front so a broken template fails startup,
    // not the first request
    let theme = Arc::new(ThemeEngine::new(config.theme)?);
    info!("Theme engine initialized (theme: {})", config.theme.name());

    // Initialize the PDF backend (launches Chrome per request)
    let rasterizer = Arc::new(ChromeRasterizer::new(config.rasterize_timeout));
    info!(
        "Chrome rasterizer initialized (timeout: {}s)",
        config.rasterize_timeout.as_secs()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        theme,
        rasterizer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
