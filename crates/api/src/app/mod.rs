//! Router construction for the three services.
//!
//! - `routes/`: handlers, one file per resource
//! - `dto.rs`: query-string shapes
//! - `errors.rs`: error → JSON response mapping
//!
//! Each builder takes its already-wired dependency, so tests and binaries
//! share the exact same router.

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use movies_infra::{MovieAggregator, MovieInfoService, ReviewService};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Movie info CRUD under `/v1/movieinfos`.
pub fn build_movie_info_app(service: MovieInfoService) -> Router {
    Router::new()
        .nest("/v1/movieinfos", routes::movie_infos::router())
        .layer(Extension(service))
        .route("/health", get(routes::system::health))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}

/// Review CRUD under `/v1/reviews`.
pub fn build_reviews_app(service: ReviewService) -> Router {
    Router::new()
        .nest("/v1/reviews", routes::reviews::router())
        .layer(Extension(service))
        .route("/health", get(routes::system::health))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}

/// Aggregated movie view under `/v1/movies`.
pub fn build_movies_app(aggregator: MovieAggregator) -> Router {
    Router::new()
        .nest("/v1/movies", routes::movies::router())
        .layer(Extension(aggregator))
        .route("/health", get(routes::system::health))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
