use crate::{error::AppResult, models::GenreTaxonomy, services::providers::CatalogProvider};

/// Fetches the provider's current genre list and indexes it by id.
pub async fn fetch_taxonomy(catalog: &dyn CatalogProvider) -> AppResult<GenreTaxonomy> {
    let genres = catalog.fetch_genres().await?;
    let taxonomy = GenreTaxonomy::from_genres(genres);

    tracing::debug!(genres = taxonomy.len(), "Genre taxonomy built");

    Ok(taxonomy)
}
