//! Movie catalog domain.
//!
//! Movie metadata, reviews and the composed movie view, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod movie;
pub mod movie_info;
pub mod review;

pub use movie::Movie;
pub use movie_info::{MovieInfo, MovieInfoDraft};
pub use review::{Review, ReviewDraft, ReviewPatch};
