//! User validation service client
//!
//! Owns every call to the user validation service: token checks for the
//! auth middleware plus the relayed registration, login and logout flows.

use reqwest::StatusCode;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    backends::{decode, endpoint, send, status_and_detail, upstream_error},
    config::Config,
    error::{AppError, AppResult, ACCESS_DENIED},
    models::{LoginRequest, MessageResponse, RegisterRequest, TokenValidation},
};

const SERVICE: &str = "user_validation";

/// User validation service client
pub struct UserValidationClient {
    client: reqwest::Client,
    base_url: Url,
}

impl UserValidationClient {
    /// Create a new user validation client
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url(&config.user_validation_service_url)?,
        })
    }

    /// Resolve the user id a bearer token belongs to
    ///
    /// Any non-200 answer is an authentication failure with the service's
    /// own status code and message.
    #[instrument(skip_all)]
    pub async fn validate_token(&self, token: &str) -> AppResult<String> {
        let url = endpoint(&self.base_url, &["validate-token"])?;

        let response = send(
            SERVICE,
            "validate_token",
            self.client.post(url).bearer_auth(token),
        )
        .await?;

        if response.status() != StatusCode::OK {
            let (status, message) = status_and_detail(response, ACCESS_DENIED).await;
            warn!(status = %status, message = %message, "Token rejected by user validation service");
            return Err(AppError::Authentication { status, message });
        }

        let validation: TokenValidation = decode(response, StatusCode::OK, ACCESS_DENIED).await?;
        debug!(user_id = %validation.user_id, "Token resolved to user");
        Ok(validation.user_id)
    }

    /// Register a new account
    #[instrument(skip_all, fields(user_name = %request.user_name))]
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<MessageResponse> {
        let url = endpoint(&self.base_url, &["register"])?;

        let response = send(SERVICE, "register", self.client.post(url).json(request)).await?;

        if response.status() != StatusCode::OK {
            return Err(upstream_error(response, "Registration failed").await);
        }

        Ok(MessageResponse::new("User registered successfully"))
    }

    /// Credential login; the session payload is relayed untouched
    #[instrument(skip_all)]
    pub async fn login(&self, request: &LoginRequest) -> AppResult<serde_json::Value> {
        let url = endpoint(&self.base_url, &["login"])?;

        let response = send(SERVICE, "login", self.client.post(url).json(request)).await?;

        decode(response, StatusCode::OK, "Login failed").await
    }

    /// Exchange a federated identity token for a session
    #[instrument(skip_all)]
    pub async fn login_federated(&self, identity_token: &str) -> AppResult<serde_json::Value> {
        let url = endpoint(&self.base_url, &["login-google"])?;

        let response = send(
            SERVICE,
            "login_federated",
            self.client.post(url).bearer_auth(identity_token),
        )
        .await?;

        decode(response, StatusCode::OK, "Login failed").await
    }

    /// End the session behind `token`
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> AppResult<MessageResponse> {
        let url = endpoint(&self.base_url, &["logout"])?;

        let response = send(SERVICE, "logout", self.client.post(url).bearer_auth(token)).await?;

        if response.status() != StatusCode::OK {
            return Err(upstream_error(response, "Logout failed").await);
        }

        Ok(MessageResponse::new("Successfully logged out"))
    }
}
