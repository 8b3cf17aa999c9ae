//! Entity validators
//!
//! Best-effort existence checks run before an action that references another
//! entity. The match service checks again when the action is submitted; these
//! only spare it writes that are bound to fail.
//!
//! A backend that cannot be reached is reported as a service error (500),
//! never as a missing entity.

use tracing::{debug, instrument};

use crate::{
    backends::MatchClient,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
};

pub const GAME_NOT_FOUND: &str = "Game not found";
pub const MATCH_NOT_FOUND: &str = "Match not found or not valid";

/// Fail with 404 unless the game exists
#[instrument(skip(match_service, caller))]
pub async fn validate_game(
    match_service: &MatchClient,
    caller: &AuthenticatedUser,
    game_id: &str,
) -> AppResult<()> {
    if match_service.game_exists(caller, game_id).await? {
        Ok(())
    } else {
        debug!("Referenced game does not exist");
        Err(AppError::NotFound(GAME_NOT_FOUND.to_string()))
    }
}

/// Fail with 404 unless the match request exists
#[instrument(skip(match_service, caller))]
pub async fn validate_match_request(
    match_service: &MatchClient,
    caller: &AuthenticatedUser,
    match_request_id: &str,
) -> AppResult<()> {
    if match_service
        .match_request_exists(caller, match_request_id)
        .await?
    {
        Ok(())
    } else {
        debug!("Referenced match request does not exist");
        Err(AppError::NotFound(MATCH_NOT_FOUND.to_string()))
    }
}
