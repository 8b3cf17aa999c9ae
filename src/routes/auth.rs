//! Session endpoints
//!
//! Registration, login and logout are relayed to the user validation
//! service. None of them sits behind the auth middleware.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    extract::AppJson,
    middleware::auth::{bearer_token, extract_bearer_token},
    models::{validate_email, LoginRequest, LoginResponse, MessageResponse, RegisterRequest},
    AppState,
};

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Session",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Rejected registration", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_email(&request.email_id)?;

    let message = state.user_validation.register(&request).await?;

    info!(user_name = %request.user_name, "User registered");
    Ok((StatusCode::OK, Json(message)))
}

/// Log in
///
/// A bearer token on the request is treated as a federated identity token
/// and exchanged for a session; otherwise the body must carry credentials.
/// The session payload is relayed as the user validation service sent it.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Session",
    request_body(content = LoginRequest, description = "Credentials, unless a federated bearer token is sent"),
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 400, description = "Login failed", body = ErrorResponse),
        (status = 401, description = "No credentials", body = ErrorResponse),
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let identity_token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token);

    let session = match identity_token {
        Some(token) => state.user_validation.login_federated(token).await?,
        None => {
            if body.is_empty() {
                return Err(AppError::Unauthorized);
            }
            let credentials: LoginRequest = serde_json::from_slice(&body)
                .map_err(|e| AppError::Validation(format!("Invalid login body: {}", e)))?;
            state.user_validation.login(&credentials).await?
        }
    };

    Ok((StatusCode::OK, Json(session)))
}

/// Log out the session behind the bearer token
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Session",
    responses(
        (status = 200, description = "Session ended", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let token = bearer_token(&headers)?;

    let message = state.user_validation.logout(token).await?;

    Ok((StatusCode::OK, Json(message)))
}
