use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use movies_core::{DomainResult, Entity, MovieInfoId, Violations};

pub const NAME_MUST_BE_PRESENT: &str = "movieInfo.name must be present";
pub const YEAR_MUST_BE_POSITIVE: &str = "movieInfo.year must be positive";
pub const CAST_MUST_BE_PRESENT: &str = "movieInfo.cast must be present";

/// Movie metadata record (one document in the `movie_infos` collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    #[serde(default)]
    pub movie_info_id: Option<MovieInfoId>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl MovieInfo {
    /// Full replacement of the mutable fields; the stored id is kept.
    pub fn replace_details(&mut self, replacement: MovieInfo) {
        self.name = replacement.name;
        self.year = replacement.year;
        self.cast = replacement.cast;
        self.release_date = replacement.release_date;
    }
}

impl Entity for MovieInfo {
    type Id = MovieInfoId;

    fn id(&self) -> Option<&Self::Id> {
        self.movie_info_id.as_ref()
    }

    fn set_id(&mut self, id: Self::Id) {
        self.movie_info_id = Some(id);
    }
}

/// Unvalidated movie info as received on the write path.
///
/// Every field is optional so that missing or null values surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieInfoDraft {
    pub movie_info_id: Option<MovieInfoId>,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub cast: Option<Vec<String>>,
    pub release_date: Option<NaiveDate>,
}

impl MovieInfoDraft {
    pub fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(
            self.name.as_deref().is_some_and(|n| !n.trim().is_empty()),
            "name",
            NAME_MUST_BE_PRESENT,
        );
        v.check(self.year.is_some_and(|y| y > 0), "year", YEAR_MUST_BE_POSITIVE);
        v.check(
            self.cast
                .as_ref()
                .is_some_and(|c| !c.is_empty() && c.iter().all(|m| !m.trim().is_empty())),
            "cast",
            CAST_MUST_BE_PRESENT,
        );
        v
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.violations().into_result()
    }

    /// Validate and convert into a storable record.
    pub fn into_movie_info(self) -> DomainResult<MovieInfo> {
        self.validate()?;
        Ok(MovieInfo {
            movie_info_id: self.movie_info_id,
            name: self.name.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            cast: self.cast.unwrap_or_default(),
            release_date: self.release_date,
        })
    }
}

impl From<MovieInfo> for MovieInfoDraft {
    fn from(info: MovieInfo) -> Self {
        Self {
            movie_info_id: info.movie_info_id,
            name: Some(info.name),
            year: Some(info.year),
            cast: Some(info.cast),
            release_date: info.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_core::DomainError;

    fn batman_begins() -> MovieInfoDraft {
        MovieInfoDraft {
            movie_info_id: None,
            name: Some("Batman Begins".to_string()),
            year: Some(2005),
            cast: Some(vec!["Christian Bale".to_string(), "Michael Cane".to_string()]),
            release_date: NaiveDate::from_ymd_opt(2005, 6, 15),
        }
    }

    #[test]
    fn valid_draft_converts_without_id() {
        let info = batman_begins().into_movie_info().unwrap();
        assert_eq!(info.movie_info_id, None);
        assert_eq!(info.name, "Batman Begins");
        assert_eq!(info.year, 2005);
        assert_eq!(info.cast.len(), 2);
    }

    #[test]
    fn draft_with_every_field_broken_reports_all_sorted() {
        let draft = MovieInfoDraft {
            name: None,
            year: Some(-2005),
            cast: Some(vec![String::new()]),
            ..batman_begins()
        };

        let err = draft.into_movie_info().unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(
                "movieInfo.cast must be present,movieInfo.name must be present,movieInfo.year must be positive"
                    .to_string()
            )
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = MovieInfoDraft {
            name: Some("   ".to_string()),
            ..batman_begins()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::Validation(NAME_MUST_BE_PRESENT.to_string())
        );
    }

    #[test]
    fn empty_cast_list_is_rejected() {
        let draft = MovieInfoDraft {
            cast: Some(vec![]),
            ..batman_begins()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::Validation(CAST_MUST_BE_PRESENT.to_string())
        );
    }

    #[test]
    fn zero_year_is_rejected() {
        let draft = MovieInfoDraft {
            year: Some(0),
            ..batman_begins()
        };
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn replace_details_keeps_id() {
        let mut stored = batman_begins().into_movie_info().unwrap();
        stored.movie_info_id = Some(MovieInfoId::new("abc"));

        let replacement = MovieInfo {
            movie_info_id: Some(MovieInfoId::new("other")),
            name: "Dark Knight Rises".to_string(),
            year: 2012,
            cast: vec!["Tom Hardy".to_string()],
            release_date: NaiveDate::from_ymd_opt(2012, 7, 20),
        };
        stored.replace_details(replacement);

        assert_eq!(stored.movie_info_id, Some(MovieInfoId::new("abc")));
        assert_eq!(stored.name, "Dark Knight Rises");
        assert_eq!(stored.year, 2012);
        assert_eq!(stored.cast, vec!["Tom Hardy".to_string()]);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let mut info = batman_begins().into_movie_info().unwrap();
        info.movie_info_id = Some(MovieInfoId::new("abc"));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["movieInfoId"], "abc");
        assert_eq!(json["releaseDate"], "2005-06-15");
    }

    #[test]
    fn draft_accepts_nulls() {
        let draft: MovieInfoDraft =
            serde_json::from_str(r#"{"name":null,"year":-2005,"cast":[""]}"#).unwrap();
        assert_eq!(draft.name, None);
        assert_eq!(draft.violations().items().len(), 3);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every well-formed draft converts, preserving all fields.
            #[test]
            fn valid_drafts_round_trip_fields(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                year in 1i32..3000,
                cast in prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 1..5),
            ) {
                let draft = MovieInfoDraft {
                    movie_info_id: None,
                    name: Some(name.clone()),
                    year: Some(year),
                    cast: Some(cast.clone()),
                    release_date: None,
                };
                let info = draft.into_movie_info().unwrap();
                prop_assert_eq!(info.name, name);
                prop_assert_eq!(info.year, year);
                prop_assert_eq!(info.cast, cast);
            }

            /// Property: the message has exactly one sorted entry per broken field.
            #[test]
            fn invalid_drafts_report_one_entry_per_field(
                bad_name in any::<bool>(),
                bad_year in any::<bool>(),
                bad_cast in any::<bool>(),
                year in -3000i32..=0,
            ) {
                prop_assume!(bad_name || bad_year || bad_cast);
                let draft = MovieInfoDraft {
                    movie_info_id: None,
                    name: if bad_name { Some(String::new()) } else { Some("Heat".to_string()) },
                    year: Some(if bad_year { year } else { 1995 }),
                    cast: Some(if bad_cast { vec![String::new()] } else { vec!["Al Pacino".to_string()] }),
                    release_date: None,
                };

                let mut expected = Vec::new();
                if bad_cast { expected.push(CAST_MUST_BE_PRESENT); }
                if bad_name { expected.push(NAME_MUST_BE_PRESENT); }
                if bad_year { expected.push(YEAR_MUST_BE_POSITIVE); }

                match draft.into_movie_info() {
                    Err(DomainError::Validation(msg)) => prop_assert_eq!(msg, expected.join(",")),
                    other => prop_assert!(false, "expected validation error, got {:?}", other),
                }
            }
        }
    }
}
