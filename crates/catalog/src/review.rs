use serde::{Deserialize, Serialize};

use movies_core::{DomainResult, Entity, ReviewId, Violations};

pub const MOVIE_INFO_ID_MUST_BE_PRESENT: &str = "review.movieInfoId must be present";
pub const RATING_MUST_BE_PRESENT: &str = "review.rating must be present";
pub const RATING_MUST_BE_NON_NEGATIVE: &str = "review.rating must be non-negative";

/// Review record (one document in the `reviews` collection).
///
/// `movie_info_id` is the join key to a movie; it is an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub review_id: Option<ReviewId>,
    pub movie_info_id: String,
    #[serde(default)]
    pub comment: String,
    pub rating: f64,
}

impl Review {
    /// Partial merge: only comment and rating change.
    pub fn apply_patch(&mut self, patch: ReviewPatch) -> DomainResult<()> {
        patch.validate()?;
        self.comment = patch.comment.unwrap_or_default();
        self.rating = patch.rating.unwrap_or_default();
        Ok(())
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> Option<&Self::Id> {
        self.review_id.as_ref()
    }

    fn set_id(&mut self, id: Self::Id) {
        self.review_id = Some(id);
    }
}

fn check_rating(v: &mut Violations, rating: Option<f64>) {
    match rating {
        None => v.check(false, "rating", RATING_MUST_BE_PRESENT),
        Some(r) => v.check(r >= 0.0, "rating", RATING_MUST_BE_NON_NEGATIVE),
    }
}

/// Unvalidated review as received on the create path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDraft {
    pub review_id: Option<ReviewId>,
    pub movie_info_id: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<f64>,
}

impl ReviewDraft {
    pub fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(
            self.movie_info_id
                .as_deref()
                .is_some_and(|id| !id.trim().is_empty()),
            "movieInfoId",
            MOVIE_INFO_ID_MUST_BE_PRESENT,
        );
        check_rating(&mut v, self.rating);
        v
    }

    pub fn into_review(self) -> DomainResult<Review> {
        self.violations().into_result()?;
        Ok(Review {
            review_id: self.review_id,
            movie_info_id: self.movie_info_id.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
        })
    }
}

/// Update payload for a review.
///
/// Only `comment` and `rating` are read; any other field in the request body
/// (ids, movie reference) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewPatch {
    pub comment: Option<String>,
    pub rating: Option<f64>,
}

impl ReviewPatch {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::new();
        check_rating(&mut v, self.rating);
        v.into_result()
    }
}
