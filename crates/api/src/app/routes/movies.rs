use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use movies_infra::MovieAggregator;

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:id", get(get_movie))
}

/// Movie info plus its reviews; 404 when the info peer does not know the id,
/// 502 when either peer call fails.
pub async fn get_movie(
    Extension(aggregator): Extension<MovieAggregator>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match aggregator.movie_by_id(&id).await {
        Ok(movie) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => errors::aggregate_error_to_response(e),
    }
}
