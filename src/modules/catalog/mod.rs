pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    CatalogQueryRepository, CatalogSearchService, MatchMode, SeriesSummary, Tokenizer,
};
pub use domain::{Episode, RecentEpisode, Season, SeasonWithSeries, Series};

// Re-export infrastructure components
pub use infrastructure::{CatalogQueryRepositoryImpl, InMemoryCatalogRepository, ScriptRunTokenizer};
