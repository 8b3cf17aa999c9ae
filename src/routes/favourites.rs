//! Favourites endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    error::{AppResult, ErrorResponse},
    extract::{AppJson, AppQuery},
    middleware::auth::AuthenticatedUser,
    models::{FavouriteRequest, FavouriteResponse, FavouritesQuery, FavouritesResponse, NewFavourite},
    routes::check_page,
    validators::validate_game,
    AppState,
};

/// Mark a game as a favourite of the caller
#[utoipa::path(
    post,
    path = "/favourite",
    tag = "Favourites",
    request_body = FavouriteRequest,
    responses(
        (status = 200, description = "Favourite stored", body = FavouriteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown game", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_favourite(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<FavouriteRequest>,
) -> AppResult<(StatusCode, Json<FavouriteResponse>)> {
    validate_game(&state.match_service, &user, &request.game_id).await?;

    let favourite = NewFavourite {
        game_id: request.game_id,
        user_id: user.user_id.clone(),
    };
    let stored = state.match_service.add_favourite(&user, &favourite).await?;

    info!(user_id = %user.user_id, game_id = %stored.game_id, "Favourite added");
    Ok((StatusCode::OK, Json(stored)))
}

/// List the caller's favourite games
#[utoipa::path(
    get,
    path = "/favourites",
    tag = "Favourites",
    params(FavouritesQuery),
    responses(
        (status = 200, description = "A page of favourite games", body = FavouritesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_favourites(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppQuery(query): AppQuery<FavouritesQuery>,
) -> AppResult<(StatusCode, Json<FavouritesResponse>)> {
    check_page(query.page, query.page_size)?;
    let params = query.page_params();

    let page = state.match_service.list_favourites(&user, &params).await?;

    Ok((
        StatusCode::OK,
        Json(FavouritesResponse {
            games: page.games,
            links: params.links("/favourites", &page.links),
        }),
    ))
}
