//! API Documentation module
//!
//! Provides OpenAPI specification generation for the gateway using utoipa.

mod openapi;

pub use openapi::GatewayApiDoc;
