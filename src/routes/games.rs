//! Games catalog endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    extract::{AppPath, AppQuery},
    middleware::auth::AuthenticatedUser,
    models::{GameResponse, GamesQuery, GamesResponse},
    routes::check_page,
    AppState,
};

/// Fetch one game
#[utoipa::path(
    get,
    path = "/games/{game_id}",
    tag = "Games",
    params(("game_id" = String, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "The game", body = GameResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown game", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(game_id): AppPath<String>,
) -> AppResult<(StatusCode, Json<GameResponse>)> {
    let game = state.match_service.get_game(&user, &game_id).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Browse the catalog
#[utoipa::path(
    get,
    path = "/games",
    tag = "Games",
    params(GamesQuery),
    responses(
        (status = 200, description = "A page of games", body = GamesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_games(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppQuery(query): AppQuery<GamesQuery>,
) -> AppResult<(StatusCode, Json<GamesResponse>)> {
    check_page(query.page, query.page_size)?;
    let params = query.page_params();

    let page = state.match_service.list_games(&user, &params).await?;

    Ok((
        StatusCode::OK,
        Json(GamesResponse {
            games: page.games,
            links: params.links("/games", &page.links),
        }),
    ))
}
