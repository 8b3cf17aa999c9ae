//! Configuration management for the Iris gateway
//!
//! Configuration is loaded once from environment variables at startup.
//! Every backend URL has a localhost default so the gateway can run against
//! a local development stack without any setup.

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Default user validation service URL
pub const DEFAULT_USER_VALIDATION_SERVICE_URL: &str = "http://localhost:8001";
/// Default match service URL
pub const DEFAULT_MATCH_SERVICE_URL: &str = "http://localhost:8002";
/// Default recommendation service URL
pub const DEFAULT_RECOM_SERVICE_URL: &str = "http://localhost:8005";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// User validation service base URL (login, logout, token checks)
    pub user_validation_service_url: String,
    /// Match service base URL (games, favourites, match requests)
    pub match_service_url: String,
    /// Recommendation service base URL
    pub recom_service_url: String,

    /// Timeout applied to every outbound backend call (in seconds)
    pub upstream_timeout_seconds: u64,

    /// Key required to view the API docs; docs are open when unset
    pub docs_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid GATEWAY_PORT")?,

            user_validation_service_url: base_url(
                "USER_VALIDATION_SERVICE_URL",
                DEFAULT_USER_VALIDATION_SERVICE_URL,
            ),
            match_service_url: base_url("MATCH_SERVICE_URL", DEFAULT_MATCH_SERVICE_URL),
            recom_service_url: base_url("RECOM_SERVICE_URL", DEFAULT_RECOM_SERVICE_URL),

            upstream_timeout_seconds: parse_timeout_seconds(
                &env::var("UPSTREAM_TIMEOUT_SECONDS").unwrap_or_else(|_| "10".to_string()),
            )?,

            docs_api_key: env::var("DOCS_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }

    /// Per-call timeout for backend requests
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

/// Parse the upstream timeout; zero would fail every backend call
fn parse_timeout_seconds(raw: &str) -> Result<u64> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?;
    if seconds == 0 {
        bail!("UPSTREAM_TIMEOUT_SECONDS must be at least 1");
    }
    Ok(seconds)
}

/// Read a base URL from the environment, without a trailing slash
fn base_url(key: &str, default: &str) -> String {
    normalize_base_url(&env::var(key).unwrap_or_else(|_| default.to_string()))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
