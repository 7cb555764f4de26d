//! Axum route handlers for the CV generation pipeline.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::load_sample_resume;

/// GET /sample-resume
///
/// Returns the fixture document exactly as stored. Read and parse failures
/// both collapse to the fixed envelope.
pub async fn handle_sample_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let resume = load_sample_resume(&state.config.sample_resume_path).await?;
    Ok(Json(resume))
}

/// POST /generate-cv
///
/// Full pipeline: body (already parsed by the `Json` extractor behind the
/// body-size limit) → theme render → browser rasterize → PDF response.
///
/// The PDF is fully buffered before the response starts, so status and
/// headers can never change after bytes are on the wire. Any pipeline
/// failure propagates as `AppError` and becomes the fixed 500 envelope.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    Json(resume): Json<Value>,
) -> Result<Response, AppError> {
    debug!("Rendering resume to HTML");
    let html = state.theme.render(&resume)?;

    info!("Rasterizing CV ({} bytes of HTML)", html.len());
    let pdf = state.rasterizer.rasterize(&html).await?;
    info!("Generated CV PDF ({} bytes)", pdf.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.pdf",
            ),
        ],
        pdf,
    )
        .into_response())
}
