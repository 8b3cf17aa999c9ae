//! Match request endpoints
//!
//! Lifecycle of a match request: create, list, fetch, start matching and
//! poll the status. The matchmaking state itself lives in the match
//! service; these handlers only check the caller and the referenced
//! entities before relaying.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    error::{AppResult, ErrorResponse},
    extract::{AppJson, AppPath, AppQuery},
    middleware::auth::AuthenticatedUser,
    models::{
        MatchInitiate, MatchInitiateResponse, MatchRequest, MatchRequestsQuery,
        MatchRequestsResponse, MatchResponse, MatchStatus, NewMatchRequest,
        UpstreamMatchInitiate,
    },
    routes::check_page,
    validators::{validate_game, validate_match_request},
    AppState,
};

/// Fetch one match request
#[utoipa::path(
    get,
    path = "/match-requests/{match_request_id}",
    tag = "Match requests",
    params(("match_request_id" = String, Path, description = "Match request identifier")),
    responses(
        (status = 200, description = "The match request", body = MatchResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown match request", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_match_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(match_request_id): AppPath<String>,
) -> AppResult<(StatusCode, Json<MatchResponse>)> {
    let match_request = state
        .match_service
        .get_match_request(&user, &match_request_id)
        .await?;

    Ok((StatusCode::OK, Json(match_request)))
}

/// List the caller's match requests
#[utoipa::path(
    get,
    path = "/match-requests",
    tag = "Match requests",
    params(MatchRequestsQuery),
    responses(
        (status = 200, description = "A page of match requests", body = MatchRequestsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_match_requests(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppQuery(query): AppQuery<MatchRequestsQuery>,
) -> AppResult<(StatusCode, Json<MatchRequestsResponse>)> {
    check_page(query.page, query.page_size)?;
    let params = query.page_params();

    let page = state.match_service.list_match_requests(&user, &params).await?;

    Ok((
        StatusCode::OK,
        Json(MatchRequestsResponse {
            match_requests: page.match_requests,
            links: params.links("/match-requests", &page.links),
        }),
    ))
}

/// Create a match request for a game
#[utoipa::path(
    post,
    path = "/match-requests",
    tag = "Match requests",
    request_body = MatchRequest,
    responses(
        (status = 201, description = "Match request created", body = MatchResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown game", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_match_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<MatchRequest>,
) -> AppResult<(StatusCode, Json<MatchResponse>)> {
    validate_game(&state.match_service, &user, &request.game_id).await?;

    let new_request = NewMatchRequest::new(&user.user_id, request);
    let created = state
        .match_service
        .create_match_request(&user, &new_request)
        .await?;

    info!(
        user_id = %user.user_id,
        match_request_id = %created.match_request_id,
        "Match request created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// Start looking for a partner for a match request
#[utoipa::path(
    post,
    path = "/match-requests/match",
    tag = "Match requests",
    request_body = MatchInitiate,
    responses(
        (status = 202, description = "Matching started", body = MatchInitiateResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown match request", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn initiate_match(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<MatchInitiate>,
) -> AppResult<(StatusCode, Json<MatchInitiateResponse>)> {
    validate_match_request(&state.match_service, &user, &request.match_request_id).await?;

    let initiate = UpstreamMatchInitiate {
        match_request_id: request.match_request_id,
        user_id: user.user_id.clone(),
    };
    let accepted = state.match_service.initiate_match(&user, &initiate).await?;

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// Poll the matchmaking status of a match request
#[utoipa::path(
    get,
    path = "/match/status/{match_request_id}",
    tag = "Match requests",
    params(("match_request_id" = String, Path, description = "Match request identifier")),
    responses(
        (status = 200, description = "Current status", body = MatchStatus),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown match request", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_match_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(match_request_id): AppPath<String>,
) -> AppResult<(StatusCode, Json<MatchStatus>)> {
    validate_match_request(&state.match_service, &user, &match_request_id).await?;

    let status = state
        .match_service
        .match_status(&user, &match_request_id)
        .await?;

    Ok((StatusCode::OK, Json(status)))
}
