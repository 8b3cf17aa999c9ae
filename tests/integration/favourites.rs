//! Favourite games tests
//!
//! - POST /favourite - Game existence check, then store
//! - GET /favourites - Caller's favourites, paginated

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bearer, constants::*, GatewayTestHarness};
use crate::mocks::MatchTestData;

#[tokio::test]
async fn test_add_favourite_injects_caller() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game(MatchTestData::game("g1", "Hades")).await;
    harness
        .matches
        .mock_json(
            "POST",
            "/favourite",
            200,
            json!({"favouriteId": "f1", "userId": TEST_USER_ID, "gameId": "g1"}),
        )
        .await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g1"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"favouriteId": "f1", "userId": "u1", "gameId": "g1"}));

    let stored = harness.matches.requests_to("POST", "/favourite").await;
    assert_eq!(stored.len(), 1);
    let payload: Value = stored[0].body_json().unwrap();
    assert_eq!(payload, json!({"gameId": "g1", "userId": "u1"}));
}

#[tokio::test]
async fn test_add_favourite_for_unknown_game_is_404_without_write() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game_missing("g404").await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g404"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"detail": "Game not found"}));
    assert!(harness.matches.requests_to("POST", "/favourite").await.is_empty());
}

#[tokio::test]
async fn test_add_favourite_with_unreachable_match_service_is_500() {
    let harness = GatewayTestHarness::start_with(|config| {
        config.match_service_url = UNREACHABLE_URL.to_string();
    })
    .await;
    harness
        .users
        .mock_validate_token(TEST_TOKEN, TEST_USER_ID)
        .await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g1"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_favourite_backend_failure_is_relayed() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game(MatchTestData::game("g1", "Hades")).await;
    harness
        .matches
        .mock_json("POST", "/favourite", 409, json!({"detail": "Already a favourite"}))
        .await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g1"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({"detail": "Already a favourite"}));
}

#[tokio::test]
async fn test_add_favourite_requires_game_id() {
    let harness = GatewayTestHarness::authenticated().await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(harness.matches.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_list_favourites_uses_caller_and_default_page_size() {
    let harness = GatewayTestHarness::authenticated().await;
    harness
        .matches
        .mock_json(
            "POST",
            "/favourites/u1",
            200,
            json!({
                "games": [MatchTestData::game("g1", "Hades")],
                "links": {"self": {"href": "http://match:8002/favourites/u1?page=1"}}
            }),
        )
        .await;

    let response = harness
        .server
        .get("/favourites")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["games"][0]["gameId"], "g1");
    assert_eq!(
        body["links"],
        json!({"self": {"href": "/favourites?page=1&page_size=5"}})
    );

    let requests = harness.matches.requests_to("POST", "/favourites/u1").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("page=1&page_size=5&user_id=u1")
    );
}
