//! Public request/response contracts
//!
//! Data shapes exchanged with gateway clients and with the backend services.
//! Field names on the wire are camelCase; legacy snake_case spellings are
//! accepted on input where older clients used them.

pub mod auth;
pub mod favourite;
pub mod game;
pub mod match_request;
pub mod pagination;
pub mod recommendation;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use auth::*;
pub use favourite::*;
pub use game::*;
pub use match_request::*;
pub use pagination::*;
pub use recommendation::*;

/// Per-resource HATEOAS links as sent by the backends, e.g. `{"self": {"href": "/games/g1"}}`
pub type ResourceLinks = BTreeMap<String, BTreeMap<String, String>>;

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
