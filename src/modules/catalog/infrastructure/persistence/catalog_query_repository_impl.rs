use async_trait::async_trait;
use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task;

use crate::modules::catalog::application::ports::CatalogQueryRepository;
use crate::modules::catalog::domain::{
    FilterExpr, RecentEpisode, Season, SeasonField, SeasonWithSeries, Series, SeriesField,
};
use crate::modules::catalog::infrastructure::models::{EpisodeModel, SeasonModel, SeriesModel};
use crate::schema::{episodes, seasons, series};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::database::{Database, DbConnection};
use crate::shared::utils::logger::LogContext;

use super::filter_sql::{season_condition, series_condition};

/// PostgreSQL implementation of the catalog query port
pub struct CatalogQueryRepositoryImpl {
    db: Arc<Database>,
}

impl CatalogQueryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Load series rows by surrogate key, keyed for parent lookups
    fn load_series_by_pk(
        conn: &mut DbConnection,
        ids: Vec<i32>,
    ) -> QueryResult<HashMap<i32, Series>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = series::table
            .filter(series::id.eq_any(ids))
            .select(SeriesModel::as_select())
            .load::<SeriesModel>(conn)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.id, Series::from(row)))
            .collect())
    }

    fn load_seasons_by_pk(
        conn: &mut DbConnection,
        ids: Vec<i32>,
    ) -> QueryResult<HashMap<i32, SeasonModel>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = seasons::table
            .filter(seasons::id.eq_any(ids))
            .select(SeasonModel::as_select())
            .load::<SeasonModel>(conn)?;

        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}

fn distinct(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[async_trait]
impl CatalogQueryRepository for CatalogQueryRepositoryImpl {
    async fn find_series(&self, filter: &FilterExpr<SeriesField>) -> AppResult<Vec<Series>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        LogContext::db_operation("find_series", "series", None);
        let start = std::time::Instant::now();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<SeriesModel>> {
            let mut conn = db.get_connection()?;

            let rows = series::table
                .select(SeriesModel::as_select())
                .into_boxed()
                .filter(series_condition(&filter))
                .order(series::id.asc())
                .load::<SeriesModel>(&mut conn)?;

            Ok(rows)
        })
        .await??;

        LogContext::db_operation(
            "find_series",
            "series",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(rows.into_iter().map(Series::from).collect())
    }

    async fn find_seasons_with_series(
        &self,
        filter: &FilterExpr<SeasonField>,
    ) -> AppResult<Vec<SeasonWithSeries>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        LogContext::db_operation("find_seasons_with_series", "seasons", None);
        let start = std::time::Instant::now();

        let matched = task::spawn_blocking(move || -> AppResult<Vec<SeasonWithSeries>> {
            let mut conn = db.get_connection()?;

            let rows = seasons::table
                .select(SeasonModel::as_select())
                .into_boxed()
                .filter(season_condition(&filter))
                .order(seasons::id.asc())
                .load::<SeasonModel>(&mut conn)?;

            // Eager-load parents in one round trip
            let parent_ids = distinct(rows.iter().map(|row| row.series_seasons));
            let parents = Self::load_series_by_pk(&mut conn, parent_ids)?;

            Ok(rows
                .into_iter()
                .map(|row| {
                    let series = parents.get(&row.series_seasons).cloned();
                    SeasonWithSeries {
                        season: Season::from(row),
                        series,
                    }
                })
                .collect())
        })
        .await??;

        LogContext::db_operation(
            "find_seasons_with_series",
            "seasons",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(matched)
    }

    async fn find_recent_episodes(&self, limit: i64) -> AppResult<Vec<RecentEpisode>> {
        let db = Arc::clone(&self.db);
        LogContext::db_operation("find_recent_episodes", "episodes", None);

        task::spawn_blocking(move || -> AppResult<Vec<RecentEpisode>> {
            let mut conn = db.get_connection()?;

            let rows = episodes::table
                .order((episodes::timestamp.desc(), episodes::id.desc()))
                .limit(limit)
                .select(EpisodeModel::as_select())
                .load::<EpisodeModel>(&mut conn)?;

            let season_ids = distinct(rows.iter().map(|row| row.season_episodes));
            let seasons = Self::load_seasons_by_pk(&mut conn, season_ids)?;
            let series_ids = distinct(seasons.values().map(|season| season.series_seasons));
            let series = Self::load_series_by_pk(&mut conn, series_ids)?;

            Ok(rows
                .into_iter()
                .map(|row| {
                    let season = seasons.get(&row.season_episodes);
                    let parent = season.and_then(|s| series.get(&s.series_seasons)).cloned();
                    RecentEpisode {
                        season: season.cloned().map(Season::from),
                        series: parent,
                        episode: row.into(),
                    }
                })
                .collect())
        })
        .await?
    }
}
