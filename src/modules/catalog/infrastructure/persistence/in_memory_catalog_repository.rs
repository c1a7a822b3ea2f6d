use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::catalog::application::ports::CatalogQueryRepository;
use crate::modules::catalog::domain::{
    Episode, FilterExpr, RecentEpisode, Season, SeasonField, SeasonWithSeries, Series, SeriesField,
};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct CatalogRows {
    series: Vec<Series>,
    /// (season, parent series_id)
    seasons: Vec<(Season, String)>,
    /// (episode, parent season_id)
    episodes: Vec<(Episode, String)>,
}

impl CatalogRows {
    fn series_by_id(&self, series_id: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.series_id == series_id)
    }

    fn season_by_id(&self, season_id: &str) -> Option<&(Season, String)> {
        self.seasons.iter().find(|(s, _)| s.season_id == season_id)
    }
}

/// In-memory catalog evaluating filters by scanning rows
///
/// Rows are returned in insertion order. Parent references are resolved at
/// query time, so a row added before its parent stays unresolved until the
/// parent exists.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    rows: Arc<RwLock<CatalogRows>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_series(&self, series: Series) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.series_by_id(&series.series_id).is_some() {
            return Err(AppError::InvalidInput(format!(
                "Series '{}' already exists",
                series.series_id
            )));
        }
        rows.series.push(series);
        Ok(())
    }

    pub async fn add_season(&self, series_id: &str, season: Season) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.season_by_id(&season.season_id).is_some() {
            return Err(AppError::InvalidInput(format!(
                "Season '{}' already exists",
                season.season_id
            )));
        }
        rows.seasons.push((season, series_id.to_string()));
        Ok(())
    }

    pub async fn add_episode(&self, season_id: &str, episode: Episode) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        rows.episodes.push((episode, season_id.to_string()));
        Ok(())
    }
}

#[async_trait]
impl CatalogQueryRepository for InMemoryCatalogRepository {
    async fn find_series(&self, filter: &FilterExpr<SeriesField>) -> AppResult<Vec<Series>> {
        let rows = self.rows.read().await;
        Ok(rows
            .series
            .iter()
            .filter(|series| filter.matches(*series))
            .cloned()
            .collect())
    }

    async fn find_seasons_with_series(
        &self,
        filter: &FilterExpr<SeasonField>,
    ) -> AppResult<Vec<SeasonWithSeries>> {
        let rows = self.rows.read().await;
        Ok(rows
            .seasons
            .iter()
            .filter(|(season, _)| filter.matches(season))
            .map(|(season, series_id)| SeasonWithSeries {
                season: season.clone(),
                series: rows.series_by_id(series_id).cloned(),
            })
            .collect())
    }

    async fn find_recent_episodes(&self, limit: i64) -> AppResult<Vec<RecentEpisode>> {
        let rows = self.rows.read().await;
        // Newest first; ties go to the later insertion, like `id DESC` in SQL
        let mut newest: Vec<(usize, &(Episode, String))> = rows.episodes.iter().enumerate().collect();
        newest.sort_by(|(ia, a), (ib, b)| {
            b.0.timestamp
                .cmp(&a.0.timestamp)
                .then_with(|| ib.cmp(ia))
        });
        newest.truncate(usize::try_from(limit.max(0)).unwrap_or(0));

        Ok(newest
            .into_iter()
            .map(|(_, (episode, season_id))| {
                let season = rows.season_by_id(season_id);
                RecentEpisode {
                    episode: episode.clone(),
                    season: season.map(|(s, _)| s.clone()),
                    series: season.and_then(|(_, series_id)| rows.series_by_id(series_id).cloned()),
                }
            })
            .collect())
    }
}
