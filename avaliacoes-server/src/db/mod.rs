//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - The pool is built once at startup and handed to handlers through state
//! - One pooled connection per request, one statement per connection
//! - No transactions, no retries
//! - The schema is external; nothing here creates or migrates tables

pub mod pool;
pub mod repos;

pub use pool::{create_pool, DbConfig};
pub use repos::*;
