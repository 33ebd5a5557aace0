//! Outbound clients for peer services.
//!
//! The aggregator reaches the movie-info and review services over HTTP. Each
//! client is a trait so the composition logic can be exercised against stubs.

pub mod movie_info;
pub mod reviews;

use async_trait::async_trait;
use thiserror::Error;

use movies_catalog::{MovieInfo, Review};

pub use movie_info::HttpMovieInfoClient;
pub use reviews::HttpReviewClient;

/// Which peer a call went to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Peer {
    MovieInfo,
    Reviews,
}

impl core::fmt::Display for Peer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Peer::MovieInfo => f.write_str("movie-info service"),
            Peer::Reviews => f.write_str("review service"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteErrorKind {
    #[error("responded with status {0}")]
    Status(u16),
    #[error("timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("undecodable response body: {0}")]
    Decode(String),
}

/// A peer call failed for transport or server-side reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{peer} call failed: {kind}")]
pub struct RemoteError {
    pub peer: Peer,
    pub kind: RemoteErrorKind,
}

impl RemoteError {
    pub fn new(peer: Peer, kind: RemoteErrorKind) -> Self {
        Self { peer, kind }
    }

    pub fn status(peer: Peer, status: reqwest::StatusCode) -> Self {
        Self::new(peer, RemoteErrorKind::Status(status.as_u16()))
    }

    pub fn from_reqwest(peer: Peer, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            RemoteErrorKind::Timeout
        } else if err.is_decode() {
            RemoteErrorKind::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteErrorKind::Status(status.as_u16())
        } else {
            RemoteErrorKind::Transport(err.to_string())
        };
        Self::new(peer, kind)
    }

    /// Message safe to hand to callers: names the peer, hides transport detail.
    pub fn public_message(&self) -> String {
        match &self.kind {
            RemoteErrorKind::Status(code) => format!("{} responded with status {code}", self.peer),
            RemoteErrorKind::Timeout => format!("{} did not respond in time", self.peer),
            RemoteErrorKind::Transport(_) => format!("{} is unreachable", self.peer),
            RemoteErrorKind::Decode(_) => format!("{} returned an unreadable response", self.peer),
        }
    }
}

/// Failure of a single-record peer lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The peer answered 404 for the requested id.
    #[error("{peer} has no record for id {id}")]
    NotFound { peer: Peer, id: String },
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[async_trait]
pub trait MovieInfoClient: Send + Sync {
    /// Fetch exactly one movie info by id.
    async fn fetch(&self, movie_id: &str) -> Result<MovieInfo, ClientError>;
}

#[async_trait]
pub trait ReviewClient: Send + Sync {
    /// Fetch every review for a movie id, in the order the peer returned them.
    ///
    /// No reviews is an empty `Vec`, not an error.
    async fn fetch_all(&self, movie_id: &str) -> Result<Vec<Review>, RemoteError>;
}
