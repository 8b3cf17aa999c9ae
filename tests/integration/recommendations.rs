//! Recommendation tests
//!
//! - POST /user_activity - Game existence check, then record
//! - GET /recommendations - Caller's recommended games

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bearer, constants::*, GatewayTestHarness};
use crate::mocks::MatchTestData;

#[tokio::test]
async fn test_record_activity_injects_caller() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game(MatchTestData::game("g1", "Hades")).await;
    harness
        .recom
        .mock_user_activity(
            200,
            json!({"userId": "u1", "gameId": "g1", "isMatched": false, "isInterested": true}),
        )
        .await;

    let response = harness
        .server
        .post("/user_activity")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g1", "isMatched": false, "isInterested": true}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "userId": "u1",
        "gameId": "g1",
        "isMatched": false,
        "isInterested": true
    }));

    let recorded: Value = harness.recom.received_requests().await[0]
        .body_json()
        .unwrap();
    assert_eq!(recorded["userId"], "u1");
    assert_eq!(recorded["isInterested"], true);
}

#[tokio::test]
async fn test_record_activity_for_unknown_game_is_404() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game_missing("g404").await;

    let response = harness
        .server
        .post("/user_activity")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .json(&json!({"gameId": "g404", "isMatched": true, "isInterested": true}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(harness.recom.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_recommendations_for_caller() {
    let harness = GatewayTestHarness::authenticated().await;
    harness
        .recom
        .mock_recommendations(
            "u1",
            3,
            json!({"userId": "u1", "games": [MatchTestData::game("g2", "Hollow Knight")]}),
        )
        .await;

    let response = harness
        .server
        .get("/recommendations")
        .add_query_param("num_recoms", 3)
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["games"][0]["title"], "Hollow Knight");
    assert!(body["games"][0].get("createdBy").is_none());
}

#[tokio::test]
async fn test_recommendations_default_count() {
    let harness = GatewayTestHarness::authenticated().await;
    harness
        .recom
        .mock_recommendations("u1", 6, json!({"userId": "u1", "games": []}))
        .await;

    harness
        .server
        .get("/recommendations")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_recommendations_rejects_zero_count() {
    let harness = GatewayTestHarness::authenticated().await;

    let response = harness
        .server
        .get("/recommendations")
        .add_query_param("num_recoms", 0)
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(harness.recom.received_requests().await.is_empty());
}
