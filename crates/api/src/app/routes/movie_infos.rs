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

use movies_catalog::MovieInfoDraft;
use movies_core::MovieInfoId;
use movies_infra::MovieInfoService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_movie_infos).post(create_movie_info))
        .route(
            "/:id",
            get(get_movie_info).put(update_movie_info).delete(delete_movie_info),
        )
}

pub async fn list_movie_infos(
    Extension(service): Extension<MovieInfoService>,
    query: Result<Query<dto::YearQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    let result = match query.year {
        Some(year) => service.get_by_year(year).await,
        None => service.get_all().await,
    };
    match result {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_movie_info(
    Extension(service): Extension<MovieInfoService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.get_by_id(&MovieInfoId::new(id)).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_movie_info(
    Extension(service): Extension<MovieInfoService>,
    body: Result<Json<MovieInfoDraft>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match service.add(draft).await {
        Ok(info) => (StatusCode::CREATED, Json(info)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_movie_info(
    Extension(service): Extension<MovieInfoService>,
    Path(id): Path<String>,
    body: Result<Json<MovieInfoDraft>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match service.update(draft, &MovieInfoId::new(id)).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// 204 whether or not the record existed.
pub async fn delete_movie_info(
    Extension(service): Extension<MovieInfoService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.delete(&MovieInfoId::new(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
