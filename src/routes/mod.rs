//! HTTP route handlers.
//!
//! The route table is explicit: exactly one route is registered. Any other
//! path falls through to axum's built-in 404 handling, and a non-GET method
//! on `/` gets the built-in 405.

pub mod greeting;

use axum::{routing::get, Router};

/// Creates the Axum router with the single greeting route.
pub fn create_router() -> Router {
    Router::new().route("/", get(greeting::greeting))
}
