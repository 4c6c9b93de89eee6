//! API error types with IntoResponse
//!
//! Errors are converted to plain-text responses. Storage failures are logged
//! here and never leak their cause to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Body for a rejected creation request.
pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios.";
/// Body for a failed listing.
pub const LIST_FAILED_MESSAGE: &str = "Erro ao buscar avaliações.";
/// Body for a failed insert.
pub const CREATE_FAILED_MESSAGE: &str = "Erro ao salvar avaliação.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or empty (400)
    Validation(ValidationError),

    /// Listing query failed (500, logged)
    ListFailed(DbError),

    /// Insert failed (500, logged)
    CreateFailed(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                tracing::debug!(field = e.field(), "rejected review: {}", e);
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            Self::ListFailed(e) => {
                tracing::error!(error = %e, "failed to list reviews");
                (StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED_MESSAGE)
            }
            Self::CreateFailed(e) => {
                tracing::error!(error = %e, "failed to save review");
                (StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED_MESSAGE)
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
