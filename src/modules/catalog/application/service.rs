use std::sync::Arc;

use crate::modules::catalog::application::dto::SeriesSummary;
use crate::modules::catalog::application::ports::{CatalogQueryRepository, Tokenizer};
use crate::modules::catalog::application::use_cases::{
    MatchMode, RecentlyUpdatedSeriesHandler, RecentlyUpdatedSeriesQuery, SearchSeriesHandler,
    SearchSeriesQuery,
};
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;

/// Entry point for the catalog read paths used by the HTTP layer
///
/// Holds no per-request state; one instance can serve concurrent requests.
pub struct CatalogSearchService {
    search_handler: SearchSeriesHandler,
    recent_handler: RecentlyUpdatedSeriesHandler,
}

impl CatalogSearchService {
    pub fn new(repository: Arc<dyn CatalogQueryRepository>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            search_handler: SearchSeriesHandler::new(Arc::clone(&repository), tokenizer),
            recent_handler: RecentlyUpdatedSeriesHandler::new(repository),
        }
    }

    /// Series whose title fields, or whose seasons' title fields, contain every query token
    pub async fn search_series(&self, query: &str) -> AppResult<Vec<SeriesSummary>> {
        self.search_series_with_mode(query, MatchMode::Strict).await
    }

    pub async fn search_series_with_mode(
        &self,
        query: &str,
        mode: MatchMode,
    ) -> AppResult<Vec<SeriesSummary>> {
        self.search_handler
            .execute(SearchSeriesQuery::new(query).with_mode(mode))
            .await
    }

    /// Distinct series of the newest episodes, most recent first
    pub async fn recently_updated_series(&self) -> AppResult<Vec<SeriesSummary>> {
        self.recent_handler
            .execute(RecentlyUpdatedSeriesQuery::default())
            .await
    }
}
