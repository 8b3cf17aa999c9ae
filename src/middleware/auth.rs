//! Authentication middleware
//!
//! Resolves the caller of every protected route through the user validation
//! service and hands the result to handlers as an [`AuthenticatedUser`]
//! request extension. Nothing is cached: each request costs exactly one
//! token check, issued before any other backend call.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, warn};

use crate::{
    backends::UserValidationClient,
    error::{AppError, AppResult},
    routes::metrics::record_auth,
    AppState,
};

/// Caller identity resolved for the current request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// Raw bearer token, forwarded to backends on the caller's behalf
    pub token: String,
}

/// Return the token of a `Bearer <token>` header value
///
/// The scheme is matched case-insensitively; an empty token is rejected.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Bearer token of an inbound request, or 401 when there is none
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or(AppError::Unauthorized)
}

/// Short fingerprint of a token, safe to log
pub fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}

/// Resolve the caller behind a bearer token
pub async fn authenticate(
    client: &UserValidationClient,
    token: &str,
) -> AppResult<AuthenticatedUser> {
    let user_id = client.validate_token(token).await?;
    Ok(AuthenticatedUser {
        user_id,
        token: token.to_string(),
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it with the user validation service
/// 3. Adds AuthenticatedUser to request extensions
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_string(),
        Err(e) => {
            record_auth("missing_token");
            debug!("Request without bearer token");
            return Err(e);
        }
    };

    debug!(token = %token_fingerprint(&token), "Processing authentication request");

    let user = match authenticate(&state.user_validation, &token).await {
        Ok(user) => user,
        Err(e) => {
            record_auth("rejected");
            warn!(status = %e.status_code(), error = %e, "Token validation failed");
            return Err(e);
        }
    };

    record_auth("success");
    debug!(user_id = %user.user_id, "User authenticated successfully");

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
