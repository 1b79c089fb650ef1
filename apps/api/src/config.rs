use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Every variable is optional; a missing `OPENROUTER_API_KEY` means the
/// resolver always answers from the fallback bundles.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_api_url: String,
    pub remote_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    /// Front-end build directory served for every non-API path.
    pub static_dir: Option<PathBuf>,
    /// Allowed CORS origins. Empty means permissive.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_api_url: optional_env("OPENROUTER_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_API_URL.to_string()),
            remote_timeout: Duration::from_secs(
                optional_env("REMOTE_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse::<u64>()
                    .context("REMOTE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: optional_env("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
            cors_origins: optional_env("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Config with the remote path disabled, for router and resolver tests.
    pub fn for_tests() -> Self {
        Config {
            openrouter_api_key: None,
            openrouter_api_url: DEFAULT_OPENROUTER_API_URL.to_string(),
            remote_timeout: Duration::from_secs(5),
            port: 0,
            rust_log: "debug".to_string(),
            static_dir: None,
            cors_origins: vec![],
        }
    }
}
