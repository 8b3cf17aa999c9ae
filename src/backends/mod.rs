//! Backend service clients
//!
//! One typed client per backend. Every outbound call goes through [`send`],
//! which records metrics and turns transport failures into
//! [`AppError::HttpError`]; responses are mapped with [`decode`] or
//! [`upstream_error`] so that status handling is identical everywhere.

pub mod match_service;
pub mod recommendations;
pub mod user_validation;

use std::time::Instant;

use anyhow::anyhow;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    error::{AppError, AppResult},
    routes::metrics::record_upstream_call,
};

pub use match_service::MatchClient;
pub use recommendations::RecomClient;
pub use user_validation::UserValidationClient;

/// Parse and check a backend base URL at startup
pub(crate) fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid backend URL {}: {}", raw, e))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("Backend URL cannot be used as a base: {}", raw));
    }
    Ok(url)
}

/// Append percent-encoded path segments to a backend base URL
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Internal(anyhow!("Backend URL cannot be a base: {}", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send one request to a backend
pub(crate) async fn send(
    service: &'static str,
    operation: &'static str,
    request: RequestBuilder,
) -> AppResult<Response> {
    let start = Instant::now();
    let result = request.send().await;
    let duration = start.elapsed().as_secs_f64();

    match result {
        Ok(response) => {
            let status = response.status();
            debug!(service, operation, status = %status, "Backend responded");
            record_upstream_call(service, operation, status.as_str(), duration);
            Ok(response)
        }
        Err(e) => {
            error!(service, operation, error = %e, "Failed to reach backend");
            record_upstream_call(service, operation, "transport_error", duration);
            Err(AppError::HttpError(e))
        }
    }
}

/// Deserialize a response body, requiring the documented success status
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
    default_message: &str,
) -> AppResult<T> {
    if response.status() != expected {
        return Err(upstream_error(response, default_message).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, body = %body, "Failed to parse backend response");
        AppError::ServiceError(e.to_string())
    })
}

/// Error carrying the backend status and its `detail`, or `default_message`
pub(crate) async fn upstream_error(response: Response, default_message: &str) -> AppError {
    let (status, message) = status_and_detail(response, default_message).await;
    AppError::Upstream { status, message }
}

/// Backend status plus its `detail` text, or `default_message` when it has none
pub(crate) async fn status_and_detail(
    response: Response,
    default_message: &str,
) -> (StatusCode, String) {
    let backend_status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(status = %backend_status, body = %body, "Backend request was not successful");

    let message = detail_message(&body).unwrap_or_else(|| default_message.to_string());
    (relayed_status(backend_status), message)
}

/// Status reported to the client for an unexpected backend answer
///
/// Backend 4xx/5xx are relayed. Any other status the handler did not expect
/// becomes 502, so an error body never travels under a success code.
pub(crate) fn relayed_status(status: StatusCode) -> StatusCode {
    if status.is_client_error() || status.is_server_error() {
        status
    } else {
        StatusCode::BAD_GATEWAY
    }
}

/// Extract a human readable message from a backend error body
///
/// Understands `{"detail": "..."}` and `{"message": "..."}`. Structured
/// details (validation error lists) are not relayed.
pub(crate) fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
