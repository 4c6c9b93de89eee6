//! Repository implementations for database access

pub mod reviews;

pub use reviews::{DbError, Review, ReviewRepo};
