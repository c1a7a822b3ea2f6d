pub mod dto;
pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use dto::SeriesSummary;
pub use ports::{CatalogQueryRepository, Tokenizer};
pub use service::CatalogSearchService;
pub use use_cases::{
    MatchMode, RecentlyUpdatedSeriesHandler, RecentlyUpdatedSeriesQuery, SearchSeriesHandler,
    SearchSeriesQuery,
};
