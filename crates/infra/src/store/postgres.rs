//! Postgres-backed document collections.
//!
//! Each collection is a table of JSONB documents:
//!
//! ```sql
//! CREATE TABLE movie_infos (
//!     id         TEXT PRIMARY KEY,
//!     doc        JSONB NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```
//!
//! Filters compare top-level JSON fields as text (`doc->>'year' = '2005'`).
//! Natural order is `created_at, id`. Saving an existing id replaces the
//! document but keeps `created_at`, so replaced documents keep their position.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | ColumnDecode / Decode | `Serialization` |
//! | PoolClosed / PoolTimedOut | `Backend` |
//! | Database / Io / other | `Backend` |

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{PgPool, Row, types::Json};
use tracing::instrument;

use movies_catalog::{MovieInfo, Review};
use movies_core::{DocumentId, Entity, MovieInfoId, ReviewId};

use super::{MovieInfoStore, ReviewStore, StoreError};

/// A single JSONB document table.
#[derive(Debug, Clone)]
pub struct PostgresCollection {
    pool: PgPool,
    table: &'static str,
}

impl PostgresCollection {
    pub fn new(pool: PgPool, table: &'static str) -> Self {
        Self { pool, table }
    }

    /// Create the table if it does not exist yet.
    #[instrument(skip(self), fields(table = self.table), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id         TEXT PRIMARY KEY,
                doc        JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
            self.table
        );
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = self.table), err)]
    pub async fn get<E: DeserializeOwned + Send + Unpin + 'static>(
        &self,
        id: &str,
    ) -> Result<Option<E>, StoreError> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", self.table);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get", e))?;

        row.map(|r| decode_doc::<E>(&r)).transpose()
    }

    /// List documents, optionally where a top-level JSON field equals `value`.
    #[instrument(skip(self), fields(table = self.table), err)]
    pub async fn list<E: DeserializeOwned + Send + Unpin + 'static>(
        &self,
        filter: Option<(&'static str, String)>,
    ) -> Result<Vec<E>, StoreError> {
        let rows = match filter {
            Some((field, value)) => {
                let sql = format!(
                    "SELECT doc FROM {} WHERE doc->>'{}' = $1 ORDER BY created_at, id",
                    self.table, field
                );
                sqlx::query(&sql).bind(value).fetch_all(&self.pool).await
            }
            None => {
                let sql = format!("SELECT doc FROM {} ORDER BY created_at, id", self.table);
                sqlx::query(&sql).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| map_sqlx_error("list", e))?;

        rows.iter().map(decode_doc::<E>).collect()
    }

    /// Insert or replace a document, minting an id on first save.
    #[instrument(skip(self, doc), fields(table = self.table), err)]
    pub async fn upsert<E>(&self, mut doc: E) -> Result<E, StoreError>
    where
        E: Entity + Serialize + Send + Sync,
    {
        let id = match doc.id() {
            Some(id) => id.clone(),
            None => {
                let id = E::Id::generate();
                doc.set_id(id.clone());
                id
            }
        };

        let sql = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc",
            self.table
        );
        sqlx::query(&sql)
            .bind(id.as_str())
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("upsert", e))?;

        Ok(doc)
    }

    #[instrument(skip(self), fields(table = self.table), err)]
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;
        Ok(())
    }
}

fn decode_doc<E: DeserializeOwned>(row: &sqlx::postgres::PgRow) -> Result<E, StoreError> {
    let Json(doc) = row
        .try_get::<Json<E>, _>("doc")
        .map_err(|e| map_sqlx_error("decode", e))?;
    Ok(doc)
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::Serialization(format!("{operation}: {err}"))
        }
        sqlx::Error::PoolClosed => {
            StoreError::Backend(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Backend(format!("connection pool timed out in {operation}"))
        }
        sqlx::Error::Database(db_err) => {
            StoreError::Backend(format!("database error in {operation}: {}", db_err.message()))
        }
        _ => StoreError::Backend(format!("sqlx error in {operation}: {err}")),
    }
}

/// `movie_infos` collection.
#[derive(Debug, Clone)]
pub struct PostgresMovieInfoStore {
    docs: PostgresCollection,
}

impl PostgresMovieInfoStore {
    pub const TABLE: &'static str = "movie_infos";

    pub fn new(pool: PgPool) -> Self {
        Self {
            docs: PostgresCollection::new(pool, Self::TABLE),
        }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.docs.ensure_schema().await
    }
}

#[async_trait]
impl MovieInfoStore for PostgresMovieInfoStore {
    async fn find_by_id(&self, id: &MovieInfoId) -> Result<Option<MovieInfo>, StoreError> {
        self.docs.get(id.as_str()).await
    }

    async fn find_all(&self) -> Result<Vec<MovieInfo>, StoreError> {
        self.docs.list(None).await
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>, StoreError> {
        self.docs.list(Some(("year", year.to_string()))).await
    }

    async fn save(&self, info: MovieInfo) -> Result<MovieInfo, StoreError> {
        self.docs.upsert(info).await
    }

    async fn delete_by_id(&self, id: &MovieInfoId) -> Result<(), StoreError> {
        self.docs.delete(id.as_str()).await
    }
}

/// `reviews` collection.
#[derive(Debug, Clone)]
pub struct PostgresReviewStore {
    docs: PostgresCollection,
}

impl PostgresReviewStore {
    pub const TABLE: &'static str = "reviews";

    pub fn new(pool: PgPool) -> Self {
        Self {
            docs: PostgresCollection::new(pool, Self::TABLE),
        }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.docs.ensure_schema().await
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, StoreError> {
        self.docs.get(id.as_str()).await
    }

    async fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        self.docs.list(None).await
    }

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>, StoreError> {
        self.docs
            .list(Some(("movieInfoId", movie_info_id.to_string())))
            .await
    }

    async fn save(&self, review: Review) -> Result<Review, StoreError> {
        self.docs.upsert(review).await
    }

    async fn delete_by_id(&self, id: &ReviewId) -> Result<(), StoreError> {
        self.docs.delete(id.as_str()).await
    }
}
