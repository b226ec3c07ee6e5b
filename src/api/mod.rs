//! HTTP API for the HealthAI assistant.
//!
//! One endpoint per template kind plus a liveness probe. The UI that
//! consumes this lives elsewhere; this surface is JSON only.

pub mod handlers;
pub mod routes;

pub use routes::configure;
