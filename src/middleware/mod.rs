//! Middleware module
//!
//! Contains Tower middleware for bearer token authentication.

pub mod auth;
