//! Document identifiers.
//!
//! Ids are opaque strings: callers may pick their own (fixtures use `"abc"`),
//! otherwise stores mint a time-ordered UUIDv7 on first save.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by every document identifier.
pub trait DocumentId: Clone + Eq + core::hash::Hash + core::fmt::Debug + Send + Sync {
    /// Mint a fresh identifier (UUIDv7, hyphenated).
    fn generate() -> Self;

    fn as_str(&self) -> &str;
}

/// Identifier of a movie info document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieInfoId(String);

/// Identifier of a review document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

macro_rules! impl_string_id {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl DocumentId for $t {
            fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_id!(MovieInfoId);
impl_string_id!(ReviewId);
