use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pdf::RasterizeError;
use crate::render::RenderError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// This is the single error-normalization boundary: every variant logs its
/// real cause server-side and answers with a fixed envelope. Clients cannot
/// distinguish a template failure from a browser crash.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sample resume error: {0}")]
    SampleResume(#[from] StoreError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Rasterize error: {0}")]
    Rasterize(#[from] RasterizeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::SampleResume(e) => {
                tracing::error!("Failed to load sample resume: {e}");
                "Failed to load sample resume"
            }
            AppError::Render(e) => {
                tracing::error!("Error generating CV: {e}");
                "Failed to generate CV"
            }
            AppError::Rasterize(e) => {
                tracing::error!("Error generating CV: {e}");
                "Failed to generate CV"
            }
        };

        let body = Json(json!({ "error": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_render_and_rasterize_share_the_generate_envelope() {
        for err in [
            AppError::Render(RenderError::NotAnObject),
            AppError::Rasterize(RasterizeError::Launch("no chrome binary".to_string())),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Failed to generate CV" })
            );
        }
    }

    #[tokio::test]
    async fn test_sample_resume_envelope_is_fixed() {
        let err = AppError::SampleResume(StoreError::Read {
            path: "resume.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to load sample resume" })
        );
    }

    #[tokio::test]
    async fn test_envelope_never_carries_the_internal_cause() {
        let err = AppError::Rasterize(RasterizeError::Export(
            "chrome said something revealing".to_string(),
        ));
        let response = err.into_response();
        let body = body_json(response).await;
        assert!(!body.to_string().contains("revealing"));
    }
}
