//! Application services: thin pass-throughs over the document stores that own
//! validation at the write boundary and not-found detection at lookup time.

pub mod movie_info;
pub mod reviews;

use thiserror::Error;

use movies_core::DomainError;

use crate::store::StoreError;

pub use movie_info::MovieInfoService;
pub use reviews::ReviewService;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }
}
