//! Placeholder HTTP service for ECS Fargate deployments.
//!
//! Serves a single static greeting on `GET /` so a task definition has a
//! workload to run and probe before the real service is deployed. One
//! listener, one route, one startup log line.

pub mod config;
pub mod http;
pub mod routes;
