use crate::modules::catalog::domain::services::RECENT_EPISODE_WINDOW;

/// Query for the recently-updated series feed
#[derive(Debug, Clone)]
pub struct RecentlyUpdatedSeriesQuery {
    /// How many of the newest episodes to consider
    pub episode_window: i64,
}

impl Default for RecentlyUpdatedSeriesQuery {
    fn default() -> Self {
        Self {
            episode_window: RECENT_EPISODE_WINDOW,
        }
    }
}
