use std::sync::Arc;

use tracing::instrument;

use movies_catalog::{MovieInfo, MovieInfoDraft};
use movies_core::{DomainError, MovieInfoId};

use super::ServiceError;
use crate::store::MovieInfoStore;

/// Movie info catalog operations.
#[derive(Clone)]
pub struct MovieInfoService {
    store: Arc<dyn MovieInfoStore>,
}

impl MovieInfoService {
    pub fn new(store: Arc<dyn MovieInfoStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<MovieInfo>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_by_year(&self, year: i32) -> Result<Vec<MovieInfo>, ServiceError> {
        Ok(self.store.find_by_year(year).await?)
    }

    pub async fn get_by_id(&self, id: &MovieInfoId) -> Result<MovieInfo, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    #[instrument(skip(self, draft), err)]
    pub async fn add(&self, draft: MovieInfoDraft) -> Result<MovieInfo, ServiceError> {
        let info = draft.into_movie_info()?;
        let saved = self.store.save(info).await?;
        tracing::info!(movie_info_id = ?saved.movie_info_id, "movie info created");
        Ok(saved)
    }

    /// Replace name, year, cast and release date of an existing record.
    #[instrument(skip(self, draft), err)]
    pub async fn update(
        &self,
        draft: MovieInfoDraft,
        id: &MovieInfoId,
    ) -> Result<MovieInfo, ServiceError> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let replacement = draft.into_movie_info()?;

        existing.replace_details(replacement);
        let saved = self.store.save(existing).await?;
        tracing::info!(movie_info_id = %id, "movie info replaced");
        Ok(saved)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: &MovieInfoId) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}

fn not_found(id: &MovieInfoId) -> DomainError {
    DomainError::not_found(format!("movie info not found for id {id}"))
}
