//! Recommendation and user activity contracts

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::game::GameResponse;

/// Default number of recommendations
pub const DEFAULT_NUM_RECOMS: u32 = 6;

/// Body of `POST /user_activity`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityRequest {
    #[serde(alias = "game_id")]
    pub game_id: String,
    pub is_matched: bool,
    pub is_interested: bool,
}

/// Activity payload sent to the recommendation service
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub user_id: String,
    pub game_id: String,
    pub is_matched: bool,
    pub is_interested: bool,
}

impl UserActivity {
    pub fn new(user_id: &str, request: UserActivityRequest) -> Self {
        Self {
            user_id: user_id.to_string(),
            game_id: request.game_id,
            is_matched: request.is_matched,
            is_interested: request.is_interested,
        }
    }
}

/// Recorded activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityResponse {
    pub user_id: String,
    pub game_id: String,
    pub is_matched: bool,
    pub is_interested: bool,
}

/// Games recommended for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub user_id: String,
    pub games: Vec<GameResponse>,
}

/// Query parameters for `GET /recommendations`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationsQuery {
    #[serde(default = "default_num_recoms")]
    pub num_recoms: u32,
}

fn default_num_recoms() -> u32 {
    DEFAULT_NUM_RECOMS
}
