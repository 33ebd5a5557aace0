use std::sync::RwLock;

use async_trait::async_trait;

use movies_catalog::{MovieInfo, Review};
use movies_core::{DocumentId, Entity, MovieInfoId, ReviewId};

use super::{MovieInfoStore, ReviewStore, StoreError};

/// In-memory document collection for tests/dev.
///
/// Documents keep insertion order; replacing a document keeps its position.
#[derive(Debug)]
pub struct InMemoryCollection<E> {
    docs: RwLock<Vec<E>>,
}

impl<E> InMemoryCollection<E> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }
}

impl<E> Default for InMemoryCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("in-memory collection lock poisoned".to_string())
}

impl<E> InMemoryCollection<E>
where
    E: Entity + Clone,
{
    /// Seed with documents as-is (ids are minted for documents without one).
    pub fn with_documents(docs: impl IntoIterator<Item = E>) -> Result<Self, StoreError> {
        let collection = Self::new();
        for doc in docs {
            collection.upsert(doc)?;
        }
        Ok(collection)
    }

    pub fn get(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let docs = self.docs.read().map_err(|_| poisoned())?;
        Ok(docs.iter().find(|d| d.id() == Some(id)).cloned())
    }

    pub fn list_where(&self, predicate: impl Fn(&E) -> bool) -> Result<Vec<E>, StoreError> {
        let docs = self.docs.read().map_err(|_| poisoned())?;
        Ok(docs.iter().filter(|d| predicate(d)).cloned().collect())
    }

    pub fn upsert(&self, mut doc: E) -> Result<E, StoreError> {
        if doc.id().is_none() {
            doc.set_id(E::Id::generate());
        }

        let mut docs = self.docs.write().map_err(|_| poisoned())?;
        match docs.iter_mut().find(|d| d.id() == doc.id()) {
            Some(existing) => *existing = doc.clone(),
            None => docs.push(doc.clone()),
        }
        Ok(doc)
    }

    pub fn remove(&self, id: &E::Id) -> Result<(), StoreError> {
        let mut docs = self.docs.write().map_err(|_| poisoned())?;
        docs.retain(|d| d.id() != Some(id));
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.docs.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl MovieInfoStore for InMemoryCollection<MovieInfo> {
    async fn find_by_id(&self, id: &MovieInfoId) -> Result<Option<MovieInfo>, StoreError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<MovieInfo>, StoreError> {
        self.list_where(|_| true)
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>, StoreError> {
        self.list_where(|m| m.year == year)
    }

    async fn save(&self, info: MovieInfo) -> Result<MovieInfo, StoreError> {
        self.upsert(info)
    }

    async fn delete_by_id(&self, id: &MovieInfoId) -> Result<(), StoreError> {
        self.remove(id)
    }
}

#[async_trait]
impl ReviewStore for InMemoryCollection<Review> {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, StoreError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        self.list_where(|_| true)
    }

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>, StoreError> {
        self.list_where(|r| r.movie_info_id == movie_info_id)
    }

    async fn save(&self, review: Review) -> Result<Review, StoreError> {
        self.upsert(review)
    }

    async fn delete_by_id(&self, id: &ReviewId) -> Result<(), StoreError> {
        self.remove(id)
    }
}
