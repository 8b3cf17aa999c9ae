//! Mock infrastructure for the backend services
//!
//! Wiremock-based stand-ins for:
//! - the user validation service (token checks, register, login, logout)
//! - the match service (games, favourites, match requests)
//! - the recommendation service (user activity, recommendations)

pub mod user_validation;

pub use match_service::*;
pub use recommendations::*;
pub use user_validation::*;
