//! HTTP server startup logic.

use axum::Router;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server.
///
/// Binds the listener on the configured address, logs the resolved port,
/// then serves requests until process exit. A bind failure (port in use,
/// permission denied) is fatal; there is no retry. This function blocks
/// until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    // Emitted after a successful bind and before the first accept, so the
    // line always reflects a live listener. local_addr carries the real
    // port even when the configured port was 0.
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "ECS application listening on port {}", addr.port());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
