use anyhow::{Context, Result};

const DEFAULT_UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request-body ceiling for the multipart CV endpoint. Kept above the CV
    /// size ceiling so oversize files are rejected by the validator.
    pub upload_body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_body_limit: match std::env::var("UPLOAD_BODY_LIMIT_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("UPLOAD_BODY_LIMIT_BYTES must be a byte count")?,
                Err(_) => DEFAULT_UPLOAD_BODY_LIMIT,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            upload_body_limit: DEFAULT_UPLOAD_BODY_LIMIT,
        }
    }
}
