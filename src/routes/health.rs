//! Health check endpoint
//!
//! Static liveness payload. It never touches a backend, so it stays green
//! while a backend is down; readiness is left to the orchestrator's probes
//! of the backends themselves.

use axum::{http::StatusCode, Json};

use crate::models::MessageResponse;

pub const HEALTH_MESSAGE: &str = "Service is up and running";

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Gateway is running", body = MessageResponse))
)]
pub async fn health_check() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse::new(HEALTH_MESSAGE)))
}
