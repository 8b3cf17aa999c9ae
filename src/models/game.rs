//! Games catalog contracts

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::pagination::{PageParams, PaginationLinks, UpstreamLinks, DEFAULT_PAGE};
use super::ResourceLinks;

/// Default page size for `GET /games`
pub const DEFAULT_GAMES_PAGE_SIZE: u32 = 10;

/// A game from the catalog
///
/// Fields the match service adds beyond these are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    #[serde(alias = "game_id")]
    pub game_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub links: Option<ResourceLinks>,
}

/// Page of games as returned by the match service
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamGamesPage {
    #[serde(default)]
    pub games: Vec<GameResponse>,
    #[serde(default)]
    pub links: UpstreamLinks,
}

/// Paginated games collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct GamesResponse {
    pub games: Vec<GameResponse>,
    pub links: PaginationLinks,
}

/// Query parameters for `GET /games`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GamesQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_games_page_size")]
    pub page_size: u32,
    pub title: Option<String>,
    #[serde(rename = "gameId", alias = "game_id")]
    pub game_id: Option<String>,
    pub genre: Option<String>,
}

impl GamesQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.page_size)
            .filter("title", self.title.as_deref())
            .filter("gameId", self.game_id.as_deref())
            .filter("genre", self.genre.as_deref())
    }
}

pub(crate) fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_games_page_size() -> u32 {
    DEFAULT_GAMES_PAGE_SIZE
}
