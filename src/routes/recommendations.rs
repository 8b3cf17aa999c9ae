//! Engagement and recommendation endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    extract::{AppJson, AppQuery},
    middleware::auth::AuthenticatedUser,
    models::{
        Recommendations, RecommendationsQuery, UserActivity, UserActivityRequest,
        UserActivityResponse,
    },
    validators::validate_game,
    AppState,
};

/// Record that the caller engaged with a game
#[utoipa::path(
    post,
    path = "/user_activity",
    tag = "Recommendations",
    request_body = UserActivityRequest,
    responses(
        (status = 200, description = "Activity recorded", body = UserActivityResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown game", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn record_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<UserActivityRequest>,
) -> AppResult<(StatusCode, Json<UserActivityResponse>)> {
    validate_game(&state.match_service, &user, &request.game_id).await?;

    let activity = UserActivity::new(&user.user_id, request);
    let recorded = state.recom_service.record_activity(&user, &activity).await?;

    Ok((StatusCode::OK, Json(recorded)))
}

/// Games recommended for the caller
#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "Recommendations",
    params(RecommendationsQuery),
    responses(
        (status = 200, description = "Recommended games", body = Recommendations),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppQuery(query): AppQuery<RecommendationsQuery>,
) -> AppResult<(StatusCode, Json<Recommendations>)> {
    if query.num_recoms == 0 {
        return Err(AppError::Validation(
            "num_recoms must be at least 1".to_string(),
        ));
    }

    let recommendations = state
        .recom_service
        .recommendations(&user, query.num_recoms)
        .await?;

    Ok((StatusCode::OK, Json(recommendations)))
}
