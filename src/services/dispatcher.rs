use crate::{
    error::AppResult,
    models::{RawMovie, ResolvedKeyword},
    services::providers::CatalogProvider,
};

/// How the catalog is queried for a resolved keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Popular movies tagged with a known genre id
    Discover { genre_id: u64 },
    /// Free-text search with the raw keyword
    Search { query: String },
}

impl CatalogQuery {
    pub fn for_keyword(resolved: &ResolvedKeyword) -> Self {
        match &resolved.genre {
            Some(genre) => CatalogQuery::Discover { genre_id: genre.id },
            None => CatalogQuery::Search {
                query: resolved.keyword.clone(),
            },
        }
    }

    fn strategy(&self) -> &'static str {
        match self {
            CatalogQuery::Discover { .. } => "discover",
            CatalogQuery::Search { .. } => "search",
        }
    }
}

/// Picks the query strategy and returns the provider's results in provider order.
pub async fn dispatch(
    catalog: &dyn CatalogProvider,
    resolved: &ResolvedKeyword,
) -> AppResult<Vec<RawMovie>> {
    let query = CatalogQuery::for_keyword(resolved);

    tracing::info!(
        keyword = %resolved.keyword,
        strategy = query.strategy(),
        "Querying catalog"
    );

    match query {
        CatalogQuery::Discover { genre_id } => catalog.discover_by_genre(genre_id).await,
        CatalogQuery::Search { query } => catalog.search_movies(&query).await,
    }
}
