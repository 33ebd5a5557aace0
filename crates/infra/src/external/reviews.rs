use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use movies_catalog::Review;

use super::{Peer, RemoteError, ReviewClient};

/// HTTP client for `GET {base}?movieInfoId={id}` on the review service.
#[derive(Debug, Clone)]
pub struct HttpReviewClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpReviewClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn reviews_url(&self, movie_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("movieInfoId", movie_id);
        url
    }
}

#[async_trait]
impl ReviewClient for HttpReviewClient {
    #[instrument(skip(self), err)]
    async fn fetch_all(&self, movie_id: &str) -> Result<Vec<Review>, RemoteError> {
        let response = self
            .http
            .get(self.reviews_url(movie_id))
            .send()
            .await
            .map_err(|e| RemoteError::from_reqwest(Peer::Reviews, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::status(Peer::Reviews, status));
        }

        let reviews = response
            .json::<Vec<Review>>()
            .await
            .map_err(|e| RemoteError::from_reqwest(Peer::Reviews, e))?;
        tracing::debug!(count = reviews.len(), "reviews fetched");
        Ok(reviews)
    }
}
