//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod review;
pub mod pagination;

pub use validation::ValidationError;
pub use review::{AuthorName, NewReview, ReviewMessage};
pub use pagination::{Pagination, PaginationParams};
