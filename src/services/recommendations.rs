use std::fmt;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationResponse, ResolvedKeyword},
    services::{
        dispatcher, formatter,
        keyword::KeywordExtractor,
        providers::{CatalogProvider, GenerativeModel},
        resolver, taxonomy,
    },
};

/// Steps of one recommendation request, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    InputValidated,
    TaxonomyFetched,
    KeywordExtracted,
    GenreResolved,
    ResultsFetched,
    Formatted,
    Responded,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Received => "received",
            PipelineStage::InputValidated => "input_validated",
            PipelineStage::TaxonomyFetched => "taxonomy_fetched",
            PipelineStage::KeywordExtracted => "keyword_extracted",
            PipelineStage::GenreResolved => "genre_resolved",
            PipelineStage::ResultsFetched => "results_fetched",
            PipelineStage::Formatted => "formatted",
            PipelineStage::Responded => "responded",
        };
        f.write_str(name)
    }
}

/// Runs the prompt → keyword → genre → catalog → display pipeline
///
/// Every step depends on the previous one, so they run strictly in sequence and the
/// first failure ends the request. Nothing is kept between requests.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn CatalogProvider>,
    extractor: KeywordExtractor,
    poster_base_url: String,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        model: Arc<dyn GenerativeModel>,
        poster_base_url: String,
    ) -> Self {
        Self {
            catalog,
            extractor: KeywordExtractor::new(model),
            poster_base_url,
        }
    }

    pub async fn recommend(&self, prompt: &str) -> AppResult<RecommendationResponse> {
        let mut stage = PipelineStage::Received;
        let result = self.run(prompt, &mut stage).await;

        match &result {
            Ok(response) => tracing::info!(
                stage = %stage,
                movies = response.movies.len(),
                "Recommendation completed"
            ),
            Err(e) => tracing::warn!(
                attempted_stage = %stage,
                error = %e,
                "Recommendation failed"
            ),
        }

        result
    }

    /// Runs the steps in order. `stage` always holds the stage being attempted, so
    /// after an error it names the step that failed.
    async fn run(
        &self,
        prompt: &str,
        stage: &mut PipelineStage,
    ) -> AppResult<RecommendationResponse> {
        *stage = PipelineStage::InputValidated;
        if prompt.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Prompt cannot be empty".to_string(),
            ));
        }

        *stage = PipelineStage::TaxonomyFetched;
        let taxonomy = taxonomy::fetch_taxonomy(self.catalog.as_ref()).await?;

        *stage = PipelineStage::KeywordExtracted;
        let keyword = self.extractor.extract(prompt).await?;
        tracing::info!(keyword = %keyword, "Keyword extracted");

        *stage = PipelineStage::GenreResolved;
        let genre = resolver::resolve_genre(&keyword, &taxonomy);
        match &genre {
            Some(g) => tracing::info!(genre_id = g.id, genre = %g.name, "Genre resolved"),
            None => tracing::info!(keyword = %keyword, "No genre matched, falling back to search"),
        }
        let resolved = ResolvedKeyword { keyword, genre };

        *stage = PipelineStage::ResultsFetched;
        let results = dispatcher::dispatch(self.catalog.as_ref(), &resolved).await?;

        *stage = PipelineStage::Formatted;
        let movies = formatter::format_movies(
            &results,
            &taxonomy,
            resolved.genre.as_ref(),
            &self.poster_base_url,
        );
        tracing::debug!(
            provider_results = results.len(),
            returned = movies.len(),
            "Results formatted"
        );

        *stage = PipelineStage::Responded;
        Ok(RecommendationResponse { movies })
    }
}
