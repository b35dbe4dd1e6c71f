/// Upstream collaborators
///
/// The pipeline talks to two external services: a movie catalog (genre list, discover,
/// search) and a generative text model (keyword extraction). Each sits behind a trait so
/// either can be swapped without touching the pipeline.
use crate::{
    error::AppResult,
    models::{Genre, RawMovie},
};

pub mod openai;
pub mod tmdb;

pub use openai::OpenAiProvider;
pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers
///
/// All queries return the first page only, with adult content excluded.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full genre list in the configured display language
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;

    /// Movies tagged with `genre_id`, most popular first
    async fn discover_by_genre(&self, genre_id: u64) -> AppResult<Vec<RawMovie>>;

    /// Free-text title search, in provider relevance order
    async fn search_movies(&self, query: &str) -> AppResult<Vec<RawMovie>>;
}

/// Single-turn completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait for generative text providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the raw completion text, which may be empty
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String>;
}

/// Treats an unset or blank key as missing
pub(crate) fn require_key<'a>(key: &'a Option<String>, name: &'static str) -> AppResult<&'a str> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(crate::error::AppError::MissingCredentials(name))
}
