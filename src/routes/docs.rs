//! Documentation endpoints
//!
//! Serves Swagger UI and the raw OpenAPI document. When a docs key is
//! configured the endpoints require a matching `X-Docs-Key` header and
//! answer 404 otherwise, hiding their existence.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::docs::GatewayApiDoc;

/// Middleware protecting the docs endpoints with an optional key
pub async fn docs_auth_middleware(
    State(expected_key): State<Option<Arc<str>>>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(expected) = expected_key else {
        return Ok(next.run(request).await);
    };

    let provided_key = request
        .headers()
        .get("X-Docs-Key")
        .and_then(|v| v.to_str().ok());

    match provided_key {
        Some(provided) if provided == &*expected => Ok(next.run(request).await),
        _ => Err(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(GatewayApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Create the docs router
///
/// Routes:
/// - GET /docs - Swagger UI
/// - GET /docs/openapi.json - Raw OpenAPI document
///
/// Generic over the state type so it can be merged into the main router.
pub fn create_docs_router<S>(docs_api_key: Option<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let key: Option<Arc<str>> = docs_api_key.map(Arc::from);

    Router::new()
        .route("/docs", get(swagger_ui))
        .route("/docs/", get(swagger_ui))
        .route("/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn_with_state(key, docs_auth_middleware))
}

/// Swagger UI page; assets come from the unpkg CDN
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Iris Gateway API - Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                persistAuthorization: true
            });
        };
    </script>
</body>
</html>"#;
