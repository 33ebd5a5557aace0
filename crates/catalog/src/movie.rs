use serde::{Deserialize, Serialize};

use crate::{MovieInfo, Review};

/// Read-only movie view: metadata plus the reviews present at read time.
///
/// Built per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieInfo,
    pub reviews: Vec<Review>,
}

impl Movie {
    pub fn new(movie_info: MovieInfo, reviews: Vec<Review>) -> Self {
        Self { movie_info, reviews }
    }
}
