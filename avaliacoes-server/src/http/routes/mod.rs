//! Route handlers organized by resource

pub mod reviews;
