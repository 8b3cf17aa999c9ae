//! Error types for the Iris gateway
//!
//! Every failure a handler can produce is an [`AppError`]. Each variant maps
//! onto an HTTP status and a uniform `{"detail": "..."}` body, so no error
//! leaves the gateway without a JSON payload.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Message used when the user validation service rejects a token without a detail
pub const ACCESS_DENIED: &str = "Access Denied";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// No usable bearer credential on the inbound request
    #[error("Not authenticated")]
    Unauthorized,

    /// The user validation service rejected the token
    #[error("{message}")]
    Authentication { status: StatusCode, message: String },

    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The inbound request could not be parsed
    #[error("{0}")]
    Validation(String),

    /// The owning backend answered with a non-success status
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The backend answered but the payload was unusable
    #[error("Service Error : {0}")]
    ServiceError(String),

    /// Transport failure talking to a backend (connect, timeout, body read)
    #[error("Service Error : {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Service Error : {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub detail: String,
}

impl AppError {
    /// HTTP status code this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Authentication { status, .. } => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream { status, .. } => *status,
            AppError::ServiceError(_) | AppError::HttpError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = %status, error = %self, "Request failed");
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
