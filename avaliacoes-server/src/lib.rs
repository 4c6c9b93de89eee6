//! avaliacoes-server: HTTP API over the `avaliacoes` reviews table
//!
//! Two operations, paginated listing and creation, each issuing a single
//! parameterized statement on one pooled Postgres connection.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbConfig, DbError, ReviewRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
