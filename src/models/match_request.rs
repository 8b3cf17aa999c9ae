//! Match request and matchmaking status contracts

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::game::default_page;
use super::pagination::{PageParams, PaginationLinks, UpstreamLinks};
use super::ResourceLinks;

/// Default page size for `GET /match-requests`
pub const DEFAULT_MATCH_REQUESTS_PAGE_SIZE: u32 = 10;

/// Body of `POST /match-requests`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(alias = "game_id")]
    pub game_id: String,
    pub expire_date: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_cancelled: bool,
}

/// Match request creation payload sent to the match service
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMatchRequest {
    pub user_id: String,
    pub game_id: String,
    pub expire_date: String,
    pub is_active: bool,
    pub is_cancelled: bool,
}

impl NewMatchRequest {
    pub fn new(user_id: &str, request: MatchRequest) -> Self {
        Self {
            user_id: user_id.to_string(),
            game_id: request.game_id,
            expire_date: request.expire_date,
            is_active: request.is_active,
            is_cancelled: request.is_cancelled,
        }
    }
}

/// A stored match request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub user_id: String,
    pub game_id: String,
    pub match_request_id: String,
    pub expire_date: String,
    pub is_active: bool,
    pub is_cancelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub links: Option<ResourceLinks>,
}

/// Page of match requests as returned by the match service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamMatchRequestsPage {
    #[serde(default)]
    pub match_requests: Vec<MatchResponse>,
    #[serde(default)]
    pub links: UpstreamLinks,
}

/// Paginated match requests of the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestsResponse {
    pub match_requests: Vec<MatchResponse>,
    pub links: PaginationLinks,
}

/// Query parameters for `GET /match-requests`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MatchRequestsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_match_requests_page_size")]
    pub page_size: u32,
    #[serde(rename = "gameId", alias = "game_id")]
    pub game_id: Option<String>,
}

impl MatchRequestsQuery {
    /// The match service reads the game filter as `game_id`
    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.page_size).filter_as(
            "gameId",
            "game_id",
            self.game_id.as_deref(),
        )
    }
}

fn default_match_requests_page_size() -> u32 {
    DEFAULT_MATCH_REQUESTS_PAGE_SIZE
}

/// Body of `POST /match-requests/match`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchInitiate {
    #[serde(alias = "MatchRequestId", alias = "match_request_id")]
    pub match_request_id: String,
}

/// Matching kick-off payload sent to the match service
///
/// The match service still reads the legacy `MatchRequestId` key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpstreamMatchInitiate {
    #[serde(rename = "MatchRequestId")]
    pub match_request_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Accepted matching process
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchInitiateResponse {
    pub message: String,
    pub match_request_id: String,
    #[serde(rename = "polling_url", alias = "pollingUrl")]
    pub polling_url: String,
}

/// Matchmaking state as computed by the match service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatusKind {
    Matching,
    Matched,
    NotFound,
    Error,
}

/// Matchmaking status of one match request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    pub match_request_id: String,
    pub status: MatchStatusKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_request_id: Option<String>,
}
