//! Match service client
//!
//! The match service owns the games catalog, favourites and match requests.
//! Calls carry the caller's bearer token and, where the service needs it,
//! the resolved user id.

use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    backends::{decode, endpoint, send},
    config::Config,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{
        FavouriteResponse, GameResponse, MatchInitiateResponse, MatchResponse, MatchStatus,
        NewFavourite, NewMatchRequest, PageParams, UpstreamFavouritesPage, UpstreamGamesPage,
        UpstreamMatchInitiate, UpstreamMatchRequestsPage,
    },
};

const SERVICE: &str = "match";

/// Match service client
pub struct MatchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl MatchClient {
    /// Create a new match service client
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url(&config.match_service_url)?,
        })
    }

    /// Whether the match service knows the game
    ///
    /// Only a 200 counts as existing. Transport failures are errors, not "absent".
    #[instrument(skip(self, caller))]
    pub async fn game_exists(&self, caller: &AuthenticatedUser, game_id: &str) -> AppResult<bool> {
        let url = endpoint(&self.base_url, &["games", game_id])?;

        let response = send(
            SERVICE,
            "game_exists",
            self.client.get(url).bearer_auth(&caller.token),
        )
        .await?;

        let exists = response.status() == StatusCode::OK;
        debug!(exists, "Game existence check");
        Ok(exists)
    }

    /// Whether the match service knows the match request
    #[instrument(skip(self, caller))]
    pub async fn match_request_exists(
        &self,
        caller: &AuthenticatedUser,
        match_request_id: &str,
    ) -> AppResult<bool> {
        let url = endpoint(&self.base_url, &["match-requests", match_request_id])?;

        let response = send(
            SERVICE,
            "match_request_exists",
            self.client.get(url).bearer_auth(&caller.token),
        )
        .await?;

        let exists = response.status() == StatusCode::OK;
        debug!(exists, "Match request existence check");
        Ok(exists)
    }

    #[instrument(skip(self, caller))]
    pub async fn get_game(&self, caller: &AuthenticatedUser, game_id: &str) -> AppResult<GameResponse> {
        let url = endpoint(&self.base_url, &["games", game_id])?;

        let response = send(
            SERVICE,
            "get_game",
            self.client.get(url).bearer_auth(&caller.token),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching game").await
    }

    #[instrument(skip(self, caller))]
    pub async fn list_games(
        &self,
        caller: &AuthenticatedUser,
        params: &PageParams,
    ) -> AppResult<UpstreamGamesPage> {
        let url = endpoint(&self.base_url, &["games"])?;

        let response = send(
            SERVICE,
            "list_games",
            self.client
                .get(url)
                .bearer_auth(&caller.token)
                .query(&params.query_pairs()),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching games").await
    }

    #[instrument(skip(self, caller))]
    pub async fn get_match_request(
        &self,
        caller: &AuthenticatedUser,
        match_request_id: &str,
    ) -> AppResult<MatchResponse> {
        let url = endpoint(&self.base_url, &["match-requests", match_request_id])?;

        let response = send(
            SERVICE,
            "get_match_request",
            self.client.get(url).bearer_auth(&caller.token),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching match request").await
    }

    /// List the caller's match requests
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn list_match_requests(
        &self,
        caller: &AuthenticatedUser,
        params: &PageParams,
    ) -> AppResult<UpstreamMatchRequestsPage> {
        let url = endpoint(&self.base_url, &["match-requests"])?;

        let mut query = params.query_pairs();
        query.push(("user_id", caller.user_id.clone()));

        let response = send(
            SERVICE,
            "list_match_requests",
            self.client.get(url).bearer_auth(&caller.token).query(&query),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching match requests").await
    }

    #[instrument(skip(self, caller, request), fields(game_id = %request.game_id))]
    pub async fn create_match_request(
        &self,
        caller: &AuthenticatedUser,
        request: &NewMatchRequest,
    ) -> AppResult<MatchResponse> {
        let url = endpoint(&self.base_url, &["match-requests"])?;

        let response = send(
            SERVICE,
            "create_match_request",
            self.client.post(url).bearer_auth(&caller.token).json(request),
        )
        .await?;

        decode(
            response,
            StatusCode::CREATED,
            "Error creating match request in the Match service",
        )
        .await
    }

    /// Ask the match service to start looking for a partner
    #[instrument(skip(self, caller, request), fields(match_request_id = %request.match_request_id))]
    pub async fn initiate_match(
        &self,
        caller: &AuthenticatedUser,
        request: &UpstreamMatchInitiate,
    ) -> AppResult<MatchInitiateResponse> {
        let url = endpoint(&self.base_url, &["match-requests", "match"])?;

        let response = send(
            SERVICE,
            "initiate_match",
            self.client.post(url).bearer_auth(&caller.token).json(request),
        )
        .await?;

        decode(response, StatusCode::ACCEPTED, "Error initiating matching process").await
    }

    /// Current matchmaking status, as computed by the match service
    #[instrument(skip(self, caller))]
    pub async fn match_status(
        &self,
        caller: &AuthenticatedUser,
        match_request_id: &str,
    ) -> AppResult<MatchStatus> {
        let url = endpoint(&self.base_url, &["match", "status", match_request_id])?;

        let response = send(
            SERVICE,
            "match_status",
            self.client.post(url).bearer_auth(&caller.token),
        )
        .await?;

        decode(response, StatusCode::OK, "Error finding match status").await
    }

    #[instrument(skip(self, caller, favourite), fields(game_id = %favourite.game_id))]
    pub async fn add_favourite(
        &self,
        caller: &AuthenticatedUser,
        favourite: &NewFavourite,
    ) -> AppResult<FavouriteResponse> {
        let url = endpoint(&self.base_url, &["favourite"])?;

        let response = send(
            SERVICE,
            "add_favourite",
            self.client.post(url).bearer_auth(&caller.token).json(favourite),
        )
        .await?;

        decode(response, StatusCode::OK, "Error adding favourite game").await
    }

    /// List the caller's favourite games
    ///
    /// The match service serves this listing on `POST`, with the page in the query string.
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn list_favourites(
        &self,
        caller: &AuthenticatedUser,
        params: &PageParams,
    ) -> AppResult<UpstreamFavouritesPage> {
        let url = endpoint(&self.base_url, &["favourites", caller.user_id.as_str()])?;

        let mut query = params.query_pairs();
        query.push(("user_id", caller.user_id.clone()));

        let response = send(
            SERVICE,
            "list_favourites",
            self.client.post(url).bearer_auth(&caller.token).query(&query),
        )
        .await?;

        decode(response, StatusCode::OK, "Error fetching favourite games").await
    }
}
