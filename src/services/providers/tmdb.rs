/// The Movie Database (TMDB) catalog provider
///
/// API Flow:
/// 1. Genres: /genre/movie/list → `{ genres: [{id, name}] }`
/// 2. Discover: /discover/movie?with_genres=… → `{ results: [...] }`
/// 3. Search: /search/movie?query=… → `{ results: [...] }`
///
/// Every call authenticates with the `api_key` query parameter and asks for the
/// configured display language.
use crate::{
    error::{AppError, AppResult},
    models::{Genre, RawMovie},
    services::providers::{require_key, CatalogProvider},
};
use reqwest::Client as HttpClient;
use serde_json::Value;

const SERVICE: &str = "TMDB";
const API_KEY_VAR: &str = "TMDB_API_KEY";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        }
    }

    /// Issues a GET and returns the decoded JSON body
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Value> {
        let api_key = require_key(&self.api_key, API_KEY_VAR)?;
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key), ("language", self.language.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::upstream(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(
                SERVICE,
                format!("API returned status {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::malformed(SERVICE, e))
    }

    /// Fetches a movie listing and keeps the entries that deserialize
    async fn fetch_movies(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Vec<RawMovie>> {
        let body = self.get_json(path, params).await?;
        let results = body["results"]
            .as_array()
            .ok_or_else(|| AppError::malformed(SERVICE, "response has no `results` list"))?;

        let movies: Vec<RawMovie> = results
            .iter()
            .filter_map(|entry| match serde_json::from_value::<RawMovie>(entry.clone()) {
                Ok(movie) => Some(movie),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable TMDB movie entry");
                    None
                }
            })
            .collect();

        tracing::info!(
            path = %path,
            results = movies.len(),
            provider = "tmdb",
            "Movie listing fetched"
        );

        Ok(movies)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        let body = self.get_json("/genre/movie/list", &[]).await?;
        let genres = body
            .get("genres")
            .cloned()
            .ok_or_else(|| AppError::malformed(SERVICE, "response has no `genres` list"))?;

        let genres: Vec<Genre> =
            serde_json::from_value(genres).map_err(|e| AppError::malformed(SERVICE, e))?;

        tracing::debug!(genres = genres.len(), provider = "tmdb", "Genre list fetched");

        Ok(genres)
    }

    async fn discover_by_genre(&self, genre_id: u64) -> AppResult<Vec<RawMovie>> {
        let genre_id = genre_id.to_string();
        self.fetch_movies(
            "/discover/movie",
            &[
                ("with_genres", genre_id.as_str()),
                ("sort_by", "popularity.desc"),
                ("page", "1"),
                ("include_adult", "false"),
            ],
        )
        .await
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<RawMovie>> {
        self.fetch_movies(
            "/search/movie",
            &[("query", query), ("page", "1"), ("include_adult", "false")],
        )
        .await
    }
}
