//! Configuration loading and constants.
//!
//! The only external configuration input is the `PORT` environment variable.
//! It is resolved once at process start into an [`AppConfig`] that is handed
//! to the server and never mutated afterwards.

use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Default listening port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8888;

/// Response body served for `GET /`.
pub const GREETING: &str = "Hello from ECS Fargate";

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "fargate_placeholder=info";

/// Application configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds on.
    pub port: u16,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(PORT_ENV).ok();
        Self {
            port: resolve_port(raw.as_deref()),
        }
    }

    /// Socket address the listener binds on: `0.0.0.0:<port>`.
    ///
    /// The host is not configurable; the task definition maps whatever
    /// port the container exposes.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Resolve the listening port from the raw `PORT` value.
///
/// A present value that parses as a `u16` wins; anything else (unset,
/// empty, non-numeric, out of range) falls back to [`DEFAULT_PORT`] with
/// a warning rather than aborting startup.
pub fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(
                    value,
                    "PORT is not a valid port number, using default {}",
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
    }
}
