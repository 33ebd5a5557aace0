use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// `GET /v1/movieinfos?year=N`; `?year=` with no value lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
}

/// `GET /v1/reviews?movieInfoId=X`
#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(rename = "movieInfoId")]
    pub movie_info_id: Option<String>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}
