/// In-memory catalog fixtures and collaborator doubles
use animatrix_lib::modules::catalog::application::ports::{CatalogQueryRepository, Tokenizer};
use animatrix_lib::modules::catalog::domain::{
    Episode, FilterExpr, RecentEpisode, Season, SeasonField, SeasonWithSeries, Series, SeriesField,
};
use animatrix_lib::modules::catalog::{CatalogSearchService, InMemoryCatalogRepository, ScriptRunTokenizer};
use animatrix_lib::shared::errors::{AppError, AppResult};
use animatrix_lib::shared::utils::init_logger;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Collects rows and loads them into an `InMemoryCatalogRepository`
#[derive(Default)]
pub struct CatalogBuilder {
    series: Vec<Series>,
    seasons: Vec<(String, Season)>,
    episodes: Vec<(String, Episode)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn season(mut self, series_id: &str, season: Season) -> Self {
        self.seasons.push((series_id.to_string(), season));
        self
    }

    pub fn episode(mut self, season_id: &str, episode: Episode) -> Self {
        self.episodes.push((season_id.to_string(), episode));
        self
    }

    pub async fn build(self) -> InMemoryCatalogRepository {
        init_logger();
        let repository = InMemoryCatalogRepository::new();
        for series in self.series {
            repository.add_series(series).await.expect("Failed to add series");
        }
        for (series_id, season) in self.seasons {
            repository
                .add_season(&series_id, season)
                .await
                .expect("Failed to add season");
        }
        for (season_id, episode) in self.episodes {
            repository
                .add_episode(&season_id, episode)
                .await
                .expect("Failed to add episode");
        }
        repository
    }

    /// Service over the built catalog with the script-run tokenizer
    pub async fn build_service(self) -> CatalogSearchService {
        let repository = Arc::new(self.build().await);
        CatalogSearchService::new(repository, Arc::new(ScriptRunTokenizer::new()))
    }
}

/// Tokenizer returning canned segmentations, falling back to the whole text
#[derive(Default)]
pub struct FixedTokenizer {
    segmentations: HashMap<String, Vec<String>>,
}

impl FixedTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, tokens: &[&str]) -> Self {
        self.segmentations.insert(
            text.to_string(),
            tokens.iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

impl Tokenizer for FixedTokenizer {
    fn tokenize(&self, text: &str) -> AppResult<Vec<String>> {
        Ok(self
            .segmentations
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![text.to_string()]))
    }
}

/// Repository whose season lookup always fails
pub struct FailingCatalogRepository {
    pub inner: InMemoryCatalogRepository,
}

#[async_trait]
impl CatalogQueryRepository for FailingCatalogRepository {
    async fn find_series(&self, filter: &FilterExpr<SeriesField>) -> AppResult<Vec<Series>> {
        self.inner.find_series(filter).await
    }

    async fn find_seasons_with_series(
        &self,
        _filter: &FilterExpr<SeasonField>,
    ) -> AppResult<Vec<SeasonWithSeries>> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }

    async fn find_recent_episodes(&self, _limit: i64) -> AppResult<Vec<RecentEpisode>> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }
}
