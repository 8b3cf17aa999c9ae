//! Integration tests for the Iris gateway
//!
//! Each test drives the real router while the backend services are played by
//! wiremock servers, then checks both the public response and what the
//! backends received.

mod auth;
mod favourites;
mod recommendations;
