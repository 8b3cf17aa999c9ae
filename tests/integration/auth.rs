//! Authentication and session endpoint tests
//!
//! - Token validation in front of every protected route
//! - POST /register, POST /login, POST /logout relayed to the user validation service

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bearer, constants::*, GatewayTestHarness};
use crate::mocks::MatchTestData;

// =============================================================================
// Token validation
// =============================================================================

#[tokio::test]
async fn test_missing_authorization_is_rejected_locally() {
    let harness = GatewayTestHarness::start().await;

    let response = harness.server.get("/games").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"detail": "Not authenticated"}));
    assert!(harness.users.received_requests().await.is_empty());
    assert!(harness.matches.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected_locally() {
    let harness = GatewayTestHarness::start().await;

    let response = harness
        .server
        .get("/favourites")
        .add_header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(harness.users.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_rejected_token_status_and_detail_are_relayed() {
    let harness = GatewayTestHarness::start().await;
    harness
        .users
        .mock_validate_token_rejected(EXPIRED_TOKEN, 401, json!({"detail": "Token expired"}))
        .await;

    let response = harness
        .server
        .get("/games/g1")
        .add_header(header::AUTHORIZATION, bearer(EXPIRED_TOKEN))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"detail": "Token expired"}));
    assert!(harness.matches.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_rejected_token_without_detail_reads_access_denied() {
    let harness = GatewayTestHarness::start().await;
    harness
        .users
        .mock_validate_token_rejected(EXPIRED_TOKEN, 403, json!({}))
        .await;

    let response = harness
        .server
        .post("/favourite")
        .add_header(header::AUTHORIZATION, bearer(EXPIRED_TOKEN))
        .json(&json!({"gameId": "g1"}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({"detail": "Access Denied"}));
    assert!(harness.matches.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_user_validation_is_a_service_error() {
    let harness = GatewayTestHarness::start_with(|config| {
        config.user_validation_service_url = UNREACHABLE_URL.to_string();
    })
    .await;

    let response = harness
        .server
        .get("/games")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().starts_with("Service Error"));
    assert!(harness.matches.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_token_is_checked_once_per_request() {
    let harness = GatewayTestHarness::authenticated().await;
    harness.matches.mock_game(MatchTestData::game("g1", "Hades")).await;

    for _ in 0..2 {
        harness
            .server
            .get("/games/g1")
            .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
            .await
            .assert_status_ok();
    }

    assert_eq!(harness.users.received_requests().await.len(), 2);
}

// =============================================================================
// POST /register
// =============================================================================

#[tokio::test]
async fn test_register_success() {
    let harness = GatewayTestHarness::start().await;
    harness.users.mock_register_success().await;

    let response = harness
        .server
        .post("/register")
        .json(&json!({
            "userName": "ana",
            "emailId": "ana@iris.dev",
            "password": "s3cret"
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "User registered successfully"}));

    let forwarded: Value = harness.users.received_requests().await[0].body_json().unwrap();
    assert_eq!(forwarded["emailId"], "ana@iris.dev");
}

#[tokio::test]
async fn test_register_rejects_malformed_email_without_backend_call() {
    let harness = GatewayTestHarness::start().await;

    let response = harness
        .server
        .post("/register")
        .json(&json!({
            "userName": "ana",
            "emailId": "not-an-email",
            "password": "s3cret"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"detail": "Invalid email address"}));
    assert!(harness.users.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_register_failure_relays_backend_status() {
    let harness = GatewayTestHarness::start().await;
    harness
        .users
        .mock_register_failure(409, json!({"detail": "Email already registered"}))
        .await;

    let response = harness
        .server
        .post("/register")
        .json(&json!({
            "userName": "ana",
            "emailId": "ana@iris.dev",
            "password": "s3cret"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({"detail": "Email already registered"}));
}

// =============================================================================
// POST /login
// =============================================================================

#[tokio::test]
async fn test_credential_login_relays_session() {
    let harness = GatewayTestHarness::start().await;
    let session = json!({"access_token": "abc", "token_type": "bearer"});
    harness
        .users
        .mock_login_success("ana@iris.dev", "s3cret", session.clone())
        .await;

    let response = harness
        .server
        .post("/login")
        .json(&json!({"emailId": "ana@iris.dev", "password": "s3cret"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&session);
}

#[tokio::test]
async fn test_federated_login_uses_bearer_token() {
    let harness = GatewayTestHarness::start().await;
    let session = json!({"access_token": "fed", "token_type": "bearer"});
    harness
        .users
        .mock_login_federated("google-id-token", session.clone())
        .await;

    let response = harness
        .server
        .post("/login")
        .add_header(header::AUTHORIZATION, bearer("google-id-token"))
        .await;

    response.assert_status_ok();
    response.assert_json(&session);
}

#[tokio::test]
async fn test_login_without_credentials_is_unauthorized() {
    let harness = GatewayTestHarness::start().await;

    let response = harness.server.post("/login").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(harness.users.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_login_failure_relays_backend_detail() {
    let harness = GatewayTestHarness::start().await;
    harness
        .users
        .mock_login_failure(400, json!({"detail": "Incorrect email or password"}))
        .await;

    let response = harness
        .server
        .post("/login")
        .json(&json!({"emailId": "ana@iris.dev", "password": "wrong"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"detail": "Incorrect email or password"}));
}

// =============================================================================
// POST /logout
// =============================================================================

#[tokio::test]
async fn test_logout_forwards_token() {
    let harness = GatewayTestHarness::start().await;
    harness.users.mock_logout_success(TEST_TOKEN).await;

    let response = harness
        .server
        .post("/logout")
        .add_header(header::AUTHORIZATION, bearer(TEST_TOKEN))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Successfully logged out"}));
}

#[tokio::test]
async fn test_logout_without_token_is_unauthorized() {
    let harness = GatewayTestHarness::start().await;

    let response = harness.server.post("/logout").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(harness.users.received_requests().await.is_empty());
}
