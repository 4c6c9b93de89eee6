//! HTTP server layer
//!
//! Axum server with:
//! - CORS (one configured origin)
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod server;
pub mod error;
pub mod routes;

pub use server::{build_router, cors_layer, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
