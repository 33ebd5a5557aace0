use std::sync::Arc;

use tracing::instrument;

use movies_catalog::{Review, ReviewDraft, ReviewPatch};
use movies_core::{DomainError, ReviewId};

use super::ServiceError;
use crate::store::ReviewStore;

/// Review catalog operations.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Reviews for one movie; the id is an opaque join key.
    pub async fn get_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>, ServiceError> {
        Ok(self.store.find_by_movie_info_id(movie_info_id).await?)
    }

    pub async fn get_by_id(&self, id: &ReviewId) -> Result<Review, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    #[instrument(skip(self, draft), err)]
    pub async fn add(&self, draft: ReviewDraft) -> Result<Review, ServiceError> {
        let review = draft.into_review()?;
        let saved = self.store.save(review).await?;
        tracing::info!(review_id = ?saved.review_id, movie_info_id = %saved.movie_info_id, "review created");
        Ok(saved)
    }

    /// Merge comment and rating into an existing review.
    #[instrument(skip(self, patch), err)]
    pub async fn update(&self, patch: ReviewPatch, id: &ReviewId) -> Result<Review, ServiceError> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        existing.apply_patch(patch)?;
        Ok(self.store.save(existing).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: &ReviewId) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}

fn not_found(id: &ReviewId) -> DomainError {
    DomainError::not_found(format!("review not found for id {id}"))
}
