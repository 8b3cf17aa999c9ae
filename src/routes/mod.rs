//! HTTP routes for the Iris gateway
//!
//! This module defines all public endpoints exposed by the gateway.

pub mod auth;
pub mod docs;
pub mod favourites;
pub mod games;
pub mod health;
pub mod match_requests;
pub mod metrics;
pub mod recommendations;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    middleware::auth::auth_middleware,
    AppState,
};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes that require a validated bearer token
    let protected_routes = Router::new()
        .route("/games", get(games::list_games))
        .route("/games/:game_id", get(games::get_game))
        .route(
            "/match-requests",
            get(match_requests::list_match_requests).post(match_requests::create_match_request),
        )
        .route("/match-requests/match", post(match_requests::initiate_match))
        .route(
            "/match-requests/:match_request_id",
            get(match_requests::get_match_request),
        )
        .route(
            "/match/status/:match_request_id",
            get(match_requests::get_match_status),
        )
        .route("/favourite", post(favourites::add_favourite))
        .route("/favourites", get(favourites::list_favourites))
        .route("/user_activity", post(recommendations::record_activity))
        .route("/recommendations", get(recommendations::get_recommendations))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Public routes - session endpoints deal with tokens themselves
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .merge(docs::create_docs_router(state.config.docs_api_key.clone()));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Unknown paths get the same `{"detail"}` body as every other error
async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Reject pagination parameters below 1
pub(crate) fn check_page(page: u32, page_size: u32) -> AppResult<()> {
    if page < 1 {
        return Err(AppError::Validation(
            "page must be greater than or equal to 1".to_string(),
        ));
    }
    if page_size < 1 {
        return Err(AppError::Validation(
            "page_size must be greater than or equal to 1".to_string(),
        ));
    }
    Ok(())
}
