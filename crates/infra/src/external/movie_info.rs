use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;
use url::Url;

use movies_catalog::MovieInfo;

use super::{ClientError, MovieInfoClient, Peer, RemoteError, RemoteErrorKind};

/// HTTP client for `GET {base}/{id}` on the movie-info service.
#[derive(Debug, Clone)]
pub struct HttpMovieInfoClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpMovieInfoClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// `{base}/{movie_id}` with the id percent-encoded as one path segment.
    pub fn movie_url(&self, movie_id: &str) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RemoteError::new(
                    Peer::MovieInfo,
                    RemoteErrorKind::Transport(format!("base url {} cannot take a path", self.base_url)),
                )
            })?
            .pop_if_empty()
            .push(movie_id);
        Ok(url)
    }
}

#[async_trait]
impl MovieInfoClient for HttpMovieInfoClient {
    #[instrument(skip(self), err)]
    async fn fetch(&self, movie_id: &str) -> Result<MovieInfo, ClientError> {
        let url = self.movie_url(movie_id)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::from_reqwest(Peer::MovieInfo, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                peer: Peer::MovieInfo,
                id: movie_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(RemoteError::status(Peer::MovieInfo, status).into());
        }

        let info = response
            .json::<MovieInfo>()
            .await
            .map_err(|e| RemoteError::from_reqwest(Peer::MovieInfo, e))?;
        Ok(info)
    }
}
