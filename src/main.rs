//! fargate-placeholder: a placeholder HTTP service for ECS Fargate.
//!
//! This is the application entry point. It initializes tracing, resolves
//! the listening port from the environment, sets up the Axum router with
//! the single greeting route, and starts the HTTP server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fargate_placeholder::config::{AppConfig, DEFAULT_LOG_FILTER};
use fargate_placeholder::http::start_server;
use fargate_placeholder::routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve configuration once; it is immutable for the process lifetime.
    let config = AppConfig::from_env();

    let app = create_router();

    start_server(app, &config).await?;

    Ok(())
}
