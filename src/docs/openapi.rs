//! OpenAPI specification for the public gateway API
//!
//! Aggregates all public endpoints and contracts into a single document.

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    error::ErrorResponse,
    models::{
        FavouriteRequest, FavouriteResponse, FavouritesResponse, GameResponse, GamesResponse,
        Link, LoginRequest, LoginResponse, MatchInitiate, MatchInitiateResponse, MatchRequest,
        MatchRequestsResponse, MatchResponse, MatchStatus, MatchStatusKind, MessageResponse,
        PaginationLinks, Recommendations, RegisterRequest, UserActivityRequest,
        UserActivityResponse,
    },
};

/// OpenAPI specification for the Iris gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Iris Gateway API",
        version = "1.0.0",
        description = "Public API of the Iris gateway - games catalog, favourites, match requests and recommendations"
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::games::get_game,
        crate::routes::games::list_games,
        crate::routes::favourites::add_favourite,
        crate::routes::favourites::list_favourites,
        crate::routes::match_requests::get_match_request,
        crate::routes::match_requests::list_match_requests,
        crate::routes::match_requests::create_match_request,
        crate::routes::match_requests::initiate_match,
        crate::routes::match_requests::get_match_status,
        crate::routes::recommendations::record_activity,
        crate::routes::recommendations::get_recommendations,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            MessageResponse,
            Link,
            PaginationLinks,
            // Session
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            // Games
            GameResponse,
            GamesResponse,
            // Favourites
            FavouriteRequest,
            FavouriteResponse,
            FavouritesResponse,
            // Match requests
            MatchRequest,
            MatchResponse,
            MatchRequestsResponse,
            MatchInitiate,
            MatchInitiateResponse,
            MatchStatusKind,
            MatchStatus,
            // Recommendations
            UserActivityRequest,
            UserActivityResponse,
            Recommendations,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Session", description = "Registration, login and logout"),
        (name = "Games", description = "Games catalog"),
        (name = "Favourites", description = "Favourite games"),
        (name = "Match requests", description = "Match request lifecycle and matchmaking status"),
        (name = "Recommendations", description = "Engagement signals and recommendations")
    )
)]
pub struct GatewayApiDoc;

/// Security scheme addon for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
