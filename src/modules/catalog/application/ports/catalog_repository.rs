use async_trait::async_trait;

use crate::modules::catalog::domain::{
    FilterExpr, RecentEpisode, SeasonField, SeasonWithSeries, Series, SeriesField,
};
use crate::shared::errors::AppResult;

/// Port (interface) for read-only catalog queries used by search
///
/// Implementations evaluate `FilterExpr` trees with fold-contains semantics
/// however their storage allows. Failures must be returned, never swallowed
/// into empty results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogQueryRepository: Send + Sync {
    /// Series whose own fields satisfy the filter
    async fn find_series(&self, filter: &FilterExpr<SeriesField>) -> AppResult<Vec<Series>>;

    /// Seasons satisfying the filter, each with its parent series loaded
    async fn find_seasons_with_series(
        &self,
        filter: &FilterExpr<SeasonField>,
    ) -> AppResult<Vec<SeasonWithSeries>>;

    /// The `limit` most recent episodes, newest first, with season and series loaded
    async fn find_recent_episodes(&self, limit: i64) -> AppResult<Vec<RecentEpisode>>;
}
