pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/sample-resume", get(handlers::handle_sample_resume))
        .route("/generate-cv", post(handlers::handle_generate_cv))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // Everything else falls through to the static directory, which also
        // serves the landing page at `/`.
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests: drive the real router with stub rasterizers (no browser needed)
// ────────────────────────────────────────────────────────────────────────────
