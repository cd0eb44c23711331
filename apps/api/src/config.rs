use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the bundled catalog.
    pub catalog_path: Option<PathBuf>,
    /// Artificial delay before answering `GET /api/jobs`.
    pub jobs_latency: Duration,
    /// Artificial delay before answering `POST /api/applications`.
    pub applications_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            catalog_path: None,
            jobs_latency: Duration::ZERO,
            applications_latency: Duration::ZERO,
        }
    }
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
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            jobs_latency: millis_env("JOBS_LATENCY_MS")?,
            applications_latency: millis_env("APPLICATIONS_LATENCY_MS")?,
        })
    }
}

fn millis_env(key: &str) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_millis(&raw)
            .with_context(|| format!("{key} must be a whole number of milliseconds")),
        Err(_) => Ok(Duration::ZERO),
    }
}

fn parse_millis(raw: &str) -> Result<Duration> {
    let ms = raw.trim().parse::<u64>()?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("500").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_millis(" 0 ").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_millis_rejects_garbage() {
        assert!(parse_millis("half a second").is_err());
        assert!(parse_millis("-5").is_err());
    }

    #[test]
    fn test_default_has_no_latency() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.jobs_latency.is_zero());
        assert!(config.catalog_path.is_none());
    }
}
