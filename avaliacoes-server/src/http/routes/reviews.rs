//! Review endpoints
//!
//! - `GET /avaliacoes?page=&limit=` lists reviews, newest first
//! - `POST /avaliacoes` stores a review

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::repos::{Review, ReviewRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewReview, Pagination, PaginationParams};

/// Body for a stored review.
pub const CREATED_MESSAGE: &str = "Avaliação salva com sucesso!";

/// Create review request. English keys are accepted as aliases.
///
/// Fields stay untyped so a number or boolean is stored as text instead of
/// failing the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(alias = "name")]
    pub nome: Option<Value>,
    #[serde(alias = "message")]
    pub mensagem: Option<Value>,
}

/// Text to store for a request field.
///
/// `null`, `false` and `0` count as absent. Strings are taken as-is (an empty
/// string is rejected later), other scalars by their display form, and
/// arrays/objects as JSON text.
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_owned()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Review response, keyed by table column
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub nome: String,
    pub mensagem: String,
    pub data: String,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            nome: r.nome,
            mensagem: r.mensagem,
            data: r.data.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /avaliacoes - list reviews by recency
///
/// The query is taken as raw pairs so no query string can be rejected.
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let page = Pagination::from(pairs.into_iter().collect::<PaginationParams>());

    let reviews = ReviewRepo::new(&state.pool)
        .list(page)
        .await
        .map_err(ApiError::ListFailed)?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// POST /avaliacoes - store a new review
///
/// A body that cannot be read as JSON is treated as having no fields.
async fn create_review(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable review body");
            CreateReviewRequest::default()
        }
    };

    let nome = field_text(req.nome);
    let mensagem = field_text(req.mensagem);
    let review = NewReview::from_fields(nome.as_deref(), mensagem.as_deref())?;

    ReviewRepo::new(&state.pool)
        .create(&review)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!("review saved");
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/avaliacoes", get(list_reviews).post(create_review))
}
