//! Recommendation service client

use reqwest::StatusCode;
use tracing::instrument;
use url::Url;

use crate::{
    backends::{decode, endpoint, send},
    config::Config,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Recommendations, UserActivity, UserActivityResponse},
};

const SERVICE: &str = "recommendations";

/// Recommendation service client
pub struct RecomClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RecomClient {
    /// Create a new recommendation service client
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url(&config.recom_service_url)?,
        })
    }

    /// Record an engagement signal for the caller
    #[instrument(skip(self, caller, activity), fields(game_id = %activity.game_id))]
    pub async fn record_activity(
        &self,
        caller: &AuthenticatedUser,
        activity: &UserActivity,
    ) -> AppResult<UserActivityResponse> {
        let url = endpoint(&self.base_url, &["user_activity"])?;

        let response = send(
            SERVICE,
            "record_activity",
            self.client.post(url).bearer_auth(&caller.token).json(activity),
        )
        .await?;

        decode(response, StatusCode::OK, "Error adding user_activity").await
    }

    /// Top `num_recoms` games for the caller
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn recommendations(
        &self,
        caller: &AuthenticatedUser,
        num_recoms: u32,
    ) -> AppResult<Recommendations> {
        let url = endpoint(&self.base_url, &["recommendations", caller.user_id.as_str()])?;

        let response = send(
            SERVICE,
            "recommendations",
            self.client
                .get(url)
                .bearer_auth(&caller.token)
                .query(&[("num_recoms", num_recoms)]),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching recommendations").await
    }
}
