pub mod genre;
pub mod movie;

pub use genre::{Genre, GenreTaxonomy, ResolvedKeyword};
pub use movie::{MovieRecord, RawMovie, RecommendationResponse, UserInput};
