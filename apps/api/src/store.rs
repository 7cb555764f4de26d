//! Resume Store stub: serves the one fixed sample document.
//!
//! Reads `resume.json` from local storage and parses it as JSON. There is
//! no write path and no caching; every call re-reads the file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the sample résumé fixture.
///
/// The document is opaque to this service: it is returned exactly as stored,
/// with no schema validation beyond being well-formed JSON.
pub async fn load_sample_resume(path: &Path) -> Result<Value, StoreError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_sample_resume_returns_stored_document_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(
            &path,
            r#"{"basics":{"name":"Ada Lovelace","label":"Engineer"}}"#,
        )
        .unwrap();

        let resume = load_sample_resume(&path).await.unwrap();
        assert_eq!(
            resume,
            json!({"basics": {"name": "Ada Lovelace", "label": "Engineer"}})
        );
    }

    #[tokio::test]
    async fn test_missing_fixture_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_sample_resume(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_corrupt_fixture_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_sample_resume(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
