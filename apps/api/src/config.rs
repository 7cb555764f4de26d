use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::Theme;

/// Application configuration loaded from environment variables.
/// Every field has a default, so the service starts with no environment
/// set at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory served as static assets (landing page lives here).
    pub static_dir: PathBuf,
    /// Fixture returned by GET /sample-resume.
    pub sample_resume_path: PathBuf,
    /// Theme applied to every generated CV. Fixed for the process lifetime.
    pub theme: Theme,
    /// Request body cap for POST /generate-cv.
    pub max_body_bytes: usize,
    /// Upper bound on a single browser render; hung exports are cut off here.
    pub rasterize_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "3005")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: PathBuf::from(env_or("STATIC_DIR", "public")),
            sample_resume_path: PathBuf::from(env_or("SAMPLE_RESUME_PATH", "resume.json")),
            theme: env_or("THEME", "even")
                .parse::<Theme>()
                .context("THEME must name a bundled theme")?,
            max_body_bytes: env_or("MAX_BODY_BYTES", "52428800") // 50 MB
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a byte count")?,
            rasterize_timeout: Duration::from_secs(
                env_or("RASTERIZE_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("RASTERIZE_TIMEOUT_SECS must be a number of seconds")?,
            ),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
