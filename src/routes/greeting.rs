//! Greeting endpoint served as the deployment placeholder.
//!
//! Plays the role of a liveness target: load balancers and the container
//! orchestrator probe this route while the real workload is not yet deployed.

use crate::config::GREETING;

/// Greeting handler.
///
/// Responds with the static greeting body. axum serves a `&'static str`
/// as `200 OK` with a `text/plain` content type.
pub async fn greeting() -> &'static str {
    GREETING
}
