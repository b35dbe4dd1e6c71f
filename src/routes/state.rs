use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;

use crate::{
    config::Config,
    services::{
        providers::{CatalogProvider, GenerativeModel, OpenAiProvider, TmdbProvider},
        RecommendationService,
    },
};

/// Shared application state
///
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationService>,
    pub cors_origin: HeaderValue,
}

impl AppState {
    pub fn new(recommender: RecommendationService, cors_origin: HeaderValue) -> Self {
        Self {
            recommender: Arc::new(recommender),
            cors_origin,
        }
    }

    /// Wires the TMDB and OpenAI providers from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog: Arc<dyn CatalogProvider> = Arc::new(TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
        ));
        let model: Arc<dyn GenerativeModel> = Arc::new(OpenAiProvider::new(
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
        ));

        if config.tmdb_api_key.is_none() {
            tracing::warn!("TMDB_API_KEY is not set; recommendations will fail");
        }
        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; recommendations will fail");
        }

        let cors_origin = HeaderValue::from_str(&config.cors_origin)
            .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

        Ok(Self::new(
            RecommendationService::new(catalog, model, config.tmdb_image_base_url.clone()),
            cors_origin,
        ))
    }
}
