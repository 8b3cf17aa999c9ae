//! Favourites contracts

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::game::{default_page, GameResponse};
use super::pagination::{PageParams, PaginationLinks, UpstreamLinks};

/// Default page size for `GET /favourites`
pub const DEFAULT_FAVOURITES_PAGE_SIZE: u32 = 5;

/// Body of `POST /favourite`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteRequest {
    #[serde(alias = "game_id")]
    pub game_id: String,
}

/// Favourite creation payload sent to the match service
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFavourite {
    pub game_id: String,
    pub user_id: String,
}

/// A stored favourite
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    pub favourite_id: String,
    pub user_id: String,
    pub game_id: String,
}

/// Page of favourite games as returned by the match service
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamFavouritesPage {
    #[serde(default)]
    pub games: Vec<GameResponse>,
    #[serde(default)]
    pub links: UpstreamLinks,
}

/// Paginated favourite games of the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct FavouritesResponse {
    pub games: Vec<GameResponse>,
    pub links: PaginationLinks,
}

/// Query parameters for `GET /favourites`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavouritesQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_favourites_page_size")]
    pub page_size: u32,
}

impl FavouritesQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.page_size)
    }
}

fn default_favourites_page_size() -> u32 {
    DEFAULT_FAVOURITES_PAGE_SIZE
}
