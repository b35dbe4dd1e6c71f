use serde::{Deserialize, Deserializer, Serialize};

/// Request body of `POST /recommend`
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub prompt: String,
}

/// Movie entry as returned by the catalog provider's discover and search endpoints
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre_ids: Vec<u64>,
}

/// Reads `null` as an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display-ready movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub year: String,
    pub genres: Vec<String>,
}

/// Response body of `POST /recommend`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub movies: Vec<MovieRecord>,
}
