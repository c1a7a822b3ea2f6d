/// Diesel models for the catalog tables
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::catalog::domain::{Episode, Season, Series};
use crate::schema::{episodes, seasons, series};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = series)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeriesModel {
    pub id: i32,
    pub series_id: String,
    pub title: String,
    pub title_yomi: Option<String>,
    pub title_en: Option<String>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = seasons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeasonModel {
    pub id: i32,
    pub season_id: String,
    pub season_title: String,
    pub season_title_yomi: Option<String>,
    pub season_number: i32,
    pub shoboi_tid: Option<i32>,
    pub description: Option<String>,
    pub first_year: Option<i32>,
    pub first_month: Option<i32>,
    pub first_end_year: Option<i32>,
    pub first_end_month: Option<i32>,
    pub series_seasons: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = episodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EpisodeModel {
    pub id: i32,
    pub title: String,
    pub episode_id: String,
    pub episode_number: i32,
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
    pub season_episodes: i32,
}

impl From<SeriesModel> for Series {
    fn from(model: SeriesModel) -> Self {
        Series {
            series_id: model.series_id,
            title: model.title,
            title_yomi: model.title_yomi,
            title_en: model.title_en,
        }
    }
}

impl From<SeasonModel> for Season {
    fn from(model: SeasonModel) -> Self {
        Season {
            season_id: model.season_id,
            season_title: model.season_title,
            season_title_yomi: model.season_title_yomi,
            season_number: model.season_number,
            shoboi_tid: model.shoboi_tid,
            description: model.description,
            first_year: model.first_year,
            first_month: model.first_month,
            first_end_year: model.first_end_year,
            first_end_month: model.first_end_month,
        }
    }
}

impl From<EpisodeModel> for Episode {
    fn from(model: EpisodeModel) -> Self {
        Episode {
            episode_id: model.episode_id,
            title: model.title,
            episode_number: model.episode_number,
            duration: model.duration,
            timestamp: model.timestamp,
        }
    }
}
