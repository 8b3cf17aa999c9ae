//! Iris gateway - public API in front of the Iris backend services
//!
//! This library provides the core functionality for the gateway server.
//! It authenticates callers through the user validation service, checks
//! that referenced games and match requests exist, forwards requests to the
//! match and recommendation services and reshapes their answers into the
//! public contract.

pub mod backends;
pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod validators;

use std::time::Duration;

use anyhow::Result;

pub use crate::backends::{MatchClient, RecomClient, UserValidationClient};
pub use crate::config::Config;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Token checks plus the relayed session endpoints
    pub user_validation: UserValidationClient,
    /// Games, favourites and match requests
    pub match_service: MatchClient,
    /// Engagement signals and recommendations
    pub recom_service: RecomClient,
}

impl AppState {
    /// Create a new application state
    ///
    /// One pooled HTTP client is shared by every backend client; its timeout
    /// bounds each outbound call.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(config.upstream_timeout())
            .timeout(config.upstream_timeout())
            .build()?;

        let user_validation = UserValidationClient::new(http_client.clone(), &config)?;
        let match_service = MatchClient::new(http_client.clone(), &config)?;
        let recom_service = RecomClient::new(http_client, &config)?;

        Ok(Self {
            config,
            user_validation,
            match_service,
            recom_service,
        })
    }
}
