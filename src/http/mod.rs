//! HTTP server startup.
//!
//! Plain HTTP only; TLS termination belongs to whatever sits in front of
//! the task (an ALB or similar).

mod server;

pub use server::{start_server, ServerError};
