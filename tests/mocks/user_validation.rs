//! Mock user validation service
//!
//! Endpoints:
//! - POST /validate-token - Resolve a bearer token to a user id
//! - POST /register - Create an account
//! - POST /login - Credential login
//! - POST /login-google - Federated login
//! - POST /logout - End a session

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock user validation server wrapper
pub struct MockUserValidationServer {
    server: MockServer,
}

impl MockUserValidationServer {
    /// Start a new mock user validation server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    // =========================================================================
    // POST /validate-token
    // =========================================================================

    /// Accept `token` as belonging to `user_id`
    pub async fn mock_validate_token(&self, token: &str, user_id: &str) {
        Mock::given(method("POST"))
            .and(path("/validate-token"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": user_id,
                "email": "player@iris.dev"
            })))
            .mount(&self.server)
            .await;
    }

    /// Reject `token` with the given status and body
    pub async fn mock_validate_token_rejected(&self, token: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/validate-token"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // Session endpoints
    // =========================================================================

    /// Accept any registration
    pub async fn mock_register_success(&self) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u9"})))
            .mount(&self.server)
            .await;
    }

    /// Reject registration with a status and body
    pub async fn mock_register_failure(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Issue a session for exactly these credentials
    pub async fn mock_login_success(&self, email_id: &str, password: &str, session: Value) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"emailId": email_id, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(session))
            .mount(&self.server)
            .await;
    }

    /// Reject every credential login
    pub async fn mock_login_failure(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Issue a session for a federated identity token
    pub async fn mock_login_federated(&self, identity_token: &str, session: Value) {
        Mock::given(method("POST"))
            .and(path("/login-google"))
            .and(header(
                "authorization",
                format!("Bearer {}", identity_token).as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(session))
            .mount(&self.server)
            .await;
    }

    /// End the session of `token`
    pub async fn mock_logout_success(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path("/logout"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&self.server)
            .await;
    }
}
