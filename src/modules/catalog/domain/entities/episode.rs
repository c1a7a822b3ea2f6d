use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{season::Season, series::Series};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_id: String,
    pub title: String,
    /// Order within the parent season
    pub episode_number: i32,
    /// Duration in seconds
    pub duration: f64,
    /// Publish / last-touched time
    pub timestamp: DateTime<Utc>,
}

impl Episode {
    pub fn new(
        episode_id: impl Into<String>,
        title: impl Into<String>,
        episode_number: i32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            episode_id: episode_id.into(),
            title: title.into(),
            episode_number,
            duration: 0.0,
            timestamp,
        }
    }
}

/// Episode with its season and grandparent series resolved.
///
/// Either reference may be missing if storage could not resolve it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEpisode {
    pub episode: Episode,
    pub season: Option<Season>,
    pub series: Option<Series>,
}

impl RecentEpisode {
    /// The grandparent series, if both links resolved
    pub fn resolved_series(&self) -> Option<&Series> {
        self.season.as_ref().and(self.series.as_ref())
    }
}
