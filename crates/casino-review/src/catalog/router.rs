use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use super::domain::{BonusId, CasinoId, GameId, ReviewId};
use super::repository::{CatalogRepository, RepositoryError};
use super::service::{CatalogService, CatalogServiceError};
use crate::admin::{CasinoForm, ExpertReviewForm, ReviewSubmission};
use crate::query::CasinoQueryParams;

/// Router builder exposing the public catalog and the admin editing endpoints.
pub fn catalog_router<R>(service: Arc<CatalogService<R>>) -> Router
where
    R: CatalogRepository + 'static,
{
    Router::new()
        .route("/api/v1/casinos", get(list_casinos_handler::<R>))
        .route("/api/v1/casinos/:casino_id", get(casino_handler::<R>))
        .route("/api/v1/bonuses/:bonus_id", get(bonus_handler::<R>))
        .route("/api/v1/games/:game_id", get(game_handler::<R>))
        .route("/api/v1/reviews", post(submit_review_handler::<R>))
        .route(
            "/api/v1/reviews/:review_id/helpful",
            post(helpful_handler::<R>),
        )
        .route("/api/v1/admin/casinos", post(create_casino_handler::<R>))
        .route(
            "/api/v1/admin/casinos/:casino_id",
            put(update_casino_handler::<R>),
        )
        .route(
            "/api/v1/admin/casinos/:casino_id/expert-review",
            put(expert_review_handler::<R>),
        )
        .route(
            "/api/v1/admin/reviews/:review_id/publish",
            post(publish_review_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_casinos_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<CasinoQueryParams>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let result = params
        .into_query()
        .map_err(CatalogServiceError::from)
        .and_then(|query| service.list_casinos(&query));

    match result {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn casino_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(casino_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.casino_detail(&CasinoId(casino_id)) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn bonus_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(bonus_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.bonus_detail(&BonusId(bonus_id)) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn game_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(game_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.game_detail(&GameId(game_id)) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_review_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    axum::Json(submission): axum::Json<ReviewSubmission>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.submit_review(submission) {
        Ok(review) => (StatusCode::ACCEPTED, axum::Json(review)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn helpful_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(review_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let id = ReviewId(review_id);
    match service.mark_helpful(&id) {
        Ok(helpful_votes) => {
            let payload = json!({
                "reviewId": id.0,
                "helpfulVotes": helpful_votes,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_casino_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    axum::Json(form): axum::Json<CasinoForm>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.create_casino(form) {
        Ok(casino) => (StatusCode::CREATED, axum::Json(casino)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_casino_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(casino_id): Path<String>,
    axum::Json(form): axum::Json<CasinoForm>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.update_casino(&CasinoId(casino_id), form) {
        Ok(casino) => (StatusCode::OK, axum::Json(casino)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn expert_review_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(casino_id): Path<String>,
    axum::Json(form): axum::Json<ExpertReviewForm>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.save_expert_review(&CasinoId(casino_id), form) {
        Ok(review) => (StatusCode::OK, axum::Json(review)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn publish_review_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(review_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.publish_review(&ReviewId(review_id)) {
        Ok(review) => (StatusCode::OK, axum::Json(review)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: CatalogServiceError) -> Response {
    match err {
        CatalogServiceError::Validation(errors) => {
            let payload = json!({
                "error": errors.to_string(),
                "fields": errors.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        CatalogServiceError::Query(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        err @ CatalogServiceError::NotFound { .. } => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        CatalogServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "record not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        CatalogServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "record already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            tracing::warn!(error = %other, "catalog request failed");
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
