use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::dto::SeriesSummary;
use crate::modules::catalog::application::ports::CatalogQueryRepository;
use crate::modules::catalog::domain::services::dedupe_recent_series;
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;

use super::{query::RecentlyUpdatedSeriesQuery, result::RecentlyUpdatedSeriesResult};

/// Query handler for the "recently updated series" feed
pub struct RecentlyUpdatedSeriesHandler {
    repository: Arc<dyn CatalogQueryRepository>,
}

impl RecentlyUpdatedSeriesHandler {
    pub fn new(repository: Arc<dyn CatalogQueryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<RecentlyUpdatedSeriesQuery, RecentlyUpdatedSeriesResult>
    for RecentlyUpdatedSeriesHandler
{
    async fn execute(
        &self,
        query: RecentlyUpdatedSeriesQuery,
    ) -> AppResult<RecentlyUpdatedSeriesResult> {
        let episodes = self
            .repository
            .find_recent_episodes(query.episode_window)
            .await?;
        let episode_count = episodes.len();

        let series = dedupe_recent_series(episodes);
        log::debug!(
            "Recently updated: {} episodes collapsed into {} series",
            episode_count,
            series.len()
        );

        Ok(series.into_iter().map(SeriesSummary::from).collect())
    }
}
