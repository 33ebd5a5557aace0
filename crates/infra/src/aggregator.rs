//! Read composition: one movie plus its reviews, fetched from two peers.
//!
//! The calls are sequential (reviews only after the movie is known) and the
//! result is all-or-nothing: a failure in either call fails the whole request
//! and nothing fetched so far is returned. No retries.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use movies_catalog::Movie;

use crate::external::{ClientError, MovieInfoClient, RemoteError, ReviewClient};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// The movie-info peer does not know the id.
    #[error("movie not found for id {movie_id}")]
    NotFound { movie_id: String },
    /// One of the peer calls failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Builds [`Movie`] views from the movie-info and review peers.
#[derive(Clone)]
pub struct MovieAggregator {
    movie_infos: Arc<dyn MovieInfoClient>,
    reviews: Arc<dyn ReviewClient>,
}

impl MovieAggregator {
    pub fn new(movie_infos: Arc<dyn MovieInfoClient>, reviews: Arc<dyn ReviewClient>) -> Self {
        Self {
            movie_infos,
            reviews,
        }
    }

    /// Compose the movie for `movie_id`.
    ///
    /// Reviews are looked up by the caller-supplied `movie_id`, not by the id
    /// stored on the fetched movie info.
    #[instrument(skip(self), err)]
    pub async fn movie_by_id(&self, movie_id: &str) -> Result<Movie, AggregateError> {
        let movie_info = match self.movie_infos.fetch(movie_id).await {
            Ok(info) => info,
            Err(ClientError::NotFound { .. }) => {
                tracing::info!(movie_id, "movie info not found; skipping review lookup");
                return Err(AggregateError::NotFound {
                    movie_id: movie_id.to_string(),
                });
            }
            Err(ClientError::Remote(e)) => {
                tracing::warn!(movie_id, error = %e, "movie info lookup failed");
                return Err(e.into());
            }
        };

        let reviews = self.reviews.fetch_all(movie_id).await.map_err(|e| {
            tracing::warn!(movie_id, error = %e, "review lookup failed; discarding movie info");
            AggregateError::from(e)
        })?;

        tracing::debug!(movie_id, reviews = reviews.len(), "movie composed");
        Ok(Movie::new(movie_info, reviews))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use movies_catalog::{MovieInfo, Review};
    use movies_core::MovieInfoId;

    use super::*;
    use crate::external::{Peer, RemoteErrorKind};

    struct StubMovieInfos {
        result: Result<MovieInfo, ClientError>,
        calls: AtomicUsize,
    }

    impl StubMovieInfos {
        fn returning(result: Result<MovieInfo, ClientError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl MovieInfoClient for StubMovieInfos {
        async fn fetch(&self, _movie_id: &str) -> Result<MovieInfo, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct StubReviews {
        result: Result<Vec<Review>, RemoteError>,
        requested: Mutex<Vec<String>>,
    }

    impl StubReviews {
        fn returning(result: Result<Vec<Review>, RemoteError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requested: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requested.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReviewClient for StubReviews {
        async fn fetch_all(&self, movie_id: &str) -> Result<Vec<Review>, RemoteError> {
            self.requested.lock().unwrap().push(movie_id.to_string());
            self.result.clone()
        }
    }

    fn dark_knight() -> MovieInfo {
        MovieInfo {
            // Stored id deliberately differs from the id the caller asks for.
            movie_info_id: Some(MovieInfoId::new("internal-7")),
            name: "The Dark Knight".to_string(),
            year: 2008,
            cast: vec!["Christian Bale".to_string(), "HeathLedger".to_string()],
            release_date: NaiveDate::from_ymd_opt(2008, 7, 18),
        }
    }

    fn review(comment: &str, rating: f64) -> Review {
        Review {
            review_id: None,
            movie_info_id: "abc".to_string(),
            comment: comment.to_string(),
            rating,
        }
    }

    fn server_error(peer: Peer) -> RemoteError {
        RemoteError::new(peer, RemoteErrorKind::Status(500))
    }

    #[tokio::test]
    async fn composes_movie_with_reviews_in_peer_order() {
        let infos = StubMovieInfos::returning(Ok(dark_knight()));
        let reviews = StubReviews::returning(Ok(vec![review("first", 9.0), review("second", 7.0)]));
        let aggregator = MovieAggregator::new(infos.clone(), reviews.clone());

        let movie = aggregator.movie_by_id("abc").await.unwrap();

        assert_eq!(movie.movie_info, dark_knight());
        let comments: Vec<&str> = movie.reviews.iter().map(|r| r.comment.as_str()).collect();
        assert_eq!(comments, vec!["first", "second"]);
        assert_eq!(*reviews.requested.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[tokio::test]
    async fn zero_reviews_is_not_an_error() {
        let infos = StubMovieInfos::returning(Ok(dark_knight()));
        let reviews = StubReviews::returning(Ok(vec![]));
        let aggregator = MovieAggregator::new(infos, reviews);

        let movie = aggregator.movie_by_id("abc").await.unwrap();
        assert!(movie.reviews.is_empty());
    }

    #[tokio::test]
    async fn unknown_movie_fails_without_calling_reviews() {
        let infos = StubMovieInfos::returning(Err(ClientError::NotFound {
            peer: Peer::MovieInfo,
            id: "zzz".to_string(),
        }));
        let reviews = StubReviews::returning(Ok(vec![review("unused", 1.0)]));
        let aggregator = MovieAggregator::new(infos.clone(), reviews.clone());

        let err = aggregator.movie_by_id("zzz").await.unwrap_err();

        assert_eq!(err, AggregateError::NotFound { movie_id: "zzz".to_string() });
        assert_eq!(infos.calls.load(Ordering::SeqCst), 1);
        assert_eq!(reviews.calls(), 0);
    }

    #[tokio::test]
    async fn movie_info_failure_propagates_without_calling_reviews() {
        let infos = StubMovieInfos::returning(Err(server_error(Peer::MovieInfo).into()));
        let reviews = StubReviews::returning(Ok(vec![]));
        let aggregator = MovieAggregator::new(infos, reviews.clone());

        let err = aggregator.movie_by_id("abc").await.unwrap_err();

        assert_eq!(err, AggregateError::Remote(server_error(Peer::MovieInfo)));
        assert_eq!(reviews.calls(), 0);
    }

    #[tokio::test]
    async fn review_failure_discards_movie_info() {
        let infos = StubMovieInfos::returning(Ok(dark_knight()));
        let reviews = StubReviews::returning(Err(server_error(Peer::Reviews)));
        let aggregator = MovieAggregator::new(infos, reviews.clone());

        let err = aggregator.movie_by_id("abc").await.unwrap_err();

        assert_eq!(err, AggregateError::Remote(server_error(Peer::Reviews)));
        assert_eq!(reviews.calls(), 1);
    }
}
