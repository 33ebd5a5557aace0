//! Document store boundary.
//!
//! One trait per collection. Each record is a single JSON document; stores
//! assign an id on first save and treat `save` of an existing id as a full
//! replacement (last write wins).

pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use movies_catalog::{MovieInfo, Review};
use movies_core::{MovieInfoId, ReviewId};

pub use in_memory::InMemoryCollection;
pub use postgres::{PostgresCollection, PostgresMovieInfoStore, PostgresReviewStore};

/// Storage failure (never a "not found": absence is `Ok(None)`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("document (de)serialization failed: {0}")]
    Serialization(String),
}

/// Collection of movie info documents.
#[async_trait]
pub trait MovieInfoStore: Send + Sync {
    async fn find_by_id(&self, id: &MovieInfoId) -> Result<Option<MovieInfo>, StoreError>;

    /// All documents in the collection's natural (insertion) order.
    async fn find_all(&self) -> Result<Vec<MovieInfo>, StoreError>;

    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>, StoreError>;

    /// Insert or replace; returns the stored document (with its id).
    async fn save(&self, info: MovieInfo) -> Result<MovieInfo, StoreError>;

    /// Remove the document if present. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &MovieInfoId) -> Result<(), StoreError>;
}

/// Collection of review documents.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Review>, StoreError>;

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>, StoreError>;

    async fn save(&self, review: Review) -> Result<Review, StoreError>;

    async fn delete_by_id(&self, id: &ReviewId) -> Result<(), StoreError>;
}
