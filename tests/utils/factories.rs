/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog rows with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use animatrix_lib::modules::catalog::domain::{Episode, Season, Series};

pub struct SeriesFactory {
    series_id: String,
    title: String,
    title_yomi: Option<String>,
    title_en: Option<String>,
}

impl SeriesFactory {
    pub fn new(series_id: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            title: format!("Series {}", series_id),
            title_yomi: None,
            title_en: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn title_yomi(mut self, title_yomi: &str) -> Self {
        self.title_yomi = Some(title_yomi.to_string());
        self
    }

    pub fn title_en(mut self, title_en: &str) -> Self {
        self.title_en = Some(title_en.to_string());
        self
    }

    pub fn build(self) -> Series {
        let mut series = Series::new(self.series_id, self.title);
        series.title_yomi = self.title_yomi;
        series.title_en = self.title_en;
        series
    }
}

pub struct SeasonFactory {
    season_id: String,
    season_title: String,
    season_title_yomi: Option<String>,
    season_number: i32,
}

impl SeasonFactory {
    pub fn new(season_id: &str) -> Self {
        Self {
            season_id: season_id.to_string(),
            season_title: format!("Season {}", season_id),
            season_title_yomi: None,
            season_number: 1,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.season_title = title.to_string();
        self
    }

    pub fn title_yomi(mut self, title_yomi: &str) -> Self {
        self.season_title_yomi = Some(title_yomi.to_string());
        self
    }

    pub fn number(mut self, season_number: i32) -> Self {
        self.season_number = season_number;
        self
    }

    pub fn build(self) -> Season {
        let mut season = Season::new(self.season_id, self.season_title, self.season_number);
        season.season_title_yomi = self.season_title_yomi;
        season
    }
}

pub struct EpisodeFactory {
    episode_id: String,
    title: String,
    episode_number: i32,
    timestamp: DateTime<Utc>,
}

impl EpisodeFactory {
    pub fn new(episode_id: &str) -> Self {
        Self {
            episode_id: episode_id.to_string(),
            title: format!("Episode {}", episode_id),
            episode_number: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn number(mut self, episode_number: i32) -> Self {
        self.episode_number = episode_number;
        self
    }

    /// Seconds after the factory's base time
    pub fn at(mut self, offset_secs: i64) -> Self {
        self.timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::seconds(offset_secs);
        self
    }

    pub fn build(self) -> Episode {
        Episode::new(self.episode_id, self.title, self.episode_number, self.timestamp)
    }
}
