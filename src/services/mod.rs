pub mod dispatcher;
pub mod formatter;
pub mod keyword;
pub mod providers;
pub mod recommendations;
pub mod resolver;
pub mod taxonomy;

pub use recommendations::RecommendationService;
