use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use movies_catalog::{ReviewDraft, ReviewPatch};
use movies_core::ReviewId;
use movies_infra::ReviewService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/:id", get(get_review).put(update_review).delete(delete_review))
}

pub async fn list_reviews(
    Extension(service): Extension<ReviewService>,
    query: Result<Query<dto::ReviewQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    let result = match query.movie_info_id.as_deref() {
        Some(movie_info_id) => service.get_by_movie_info_id(movie_info_id).await,
        None => service.get_all().await,
    };
    match result {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_review(
    Extension(service): Extension<ReviewService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.get_by_id(&ReviewId::new(id)).await {
        Ok(review) => (StatusCode::OK, Json(review)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_review(
    Extension(service): Extension<ReviewService>,
    body: Result<Json<ReviewDraft>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match service.add(draft).await {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Only `comment` and `rating` are read from the body.
pub async fn update_review(
    Extension(service): Extension<ReviewService>,
    Path(id): Path<String>,
    body: Result<Json<ReviewPatch>, JsonRejection>,
) -> axum::response::Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match service.update(patch, &ReviewId::new(id)).await {
        Ok(review) => (StatusCode::OK, Json(review)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_review(
    Extension(service): Extension<ReviewService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.delete(&ReviewId::new(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
