use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::modules::catalog::domain::entities::{RecentEpisode, Series};

/// Number of most recent episodes the recently-updated feed looks at
pub const RECENT_EPISODE_WINDOW: i64 = 30;

/// Distinct series of the given episodes, most recently updated first.
///
/// Input is expected newest-first; each series keeps the timestamp of its
/// first (newest) episode. The final sort is stable, so ties keep input order.
/// Episodes whose season or series is unresolved are ignored.
pub fn dedupe_recent_series(episodes: Vec<RecentEpisode>) -> Vec<Series> {
    let mut seen = HashSet::new();
    let mut latest: Vec<(Series, DateTime<Utc>)> = Vec::new();

    for recent in episodes {
        let Some(series) = recent.resolved_series() else {
            log::debug!(
                "Episode '{}' has no resolvable series, skipping",
                recent.episode.episode_id
            );
            continue;
        };
        if seen.insert(series.series_id.clone()) {
            latest.push((series.clone(), recent.episode.timestamp));
        }
    }

    latest.sort_by(|a, b| b.1.cmp(&a.1));
    latest.into_iter().map(|(series, _)| series).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::{Episode, Season};
    use chrono::TimeZone;

    fn episode(id: &str, ts: i64, series: Option<&Series>) -> RecentEpisode {
        RecentEpisode {
            episode: Episode::new(id, id, 1, Utc.timestamp_opt(ts, 0).unwrap()),
            season: Some(Season::new(format!("{}-season", id), "season", 1)),
            series: series.cloned(),
        }
    }

    fn ids(series: Vec<Series>) -> Vec<String> {
        series.into_iter().map(|s| s.series_id).collect()
    }

    #[test]
    fn test_latest_episode_wins_per_series() {
        let a = Series::new("A", "Series A");
        let b = Series::new("B", "Series B");
        let episodes = vec![
            episode("e1", 10, Some(&a)),
            episode("e2", 9, Some(&b)),
            episode("e3", 8, Some(&a)),
        ];

        assert_eq!(ids(dedupe_recent_series(episodes)), vec!["A", "B"]);
    }

    #[test]
    fn test_output_sorted_even_if_input_is_not() {
        let a = Series::new("A", "Series A");
        let b = Series::new("B", "Series B");
        let episodes = vec![episode("e1", 5, Some(&a)), episode("e2", 7, Some(&b))];

        assert_eq!(ids(dedupe_recent_series(episodes)), vec!["B", "A"]);
    }

    #[test]
    fn test_unresolved_references_are_skipped() {
        let a = Series::new("A", "Series A");
        let mut no_season = episode("e0", 20, Some(&a));
        no_season.season = None;
        let episodes = vec![no_season, episode("e1", 15, None), episode("e2", 3, Some(&a))];

        assert_eq!(ids(dedupe_recent_series(episodes)), vec!["A"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_recent_series(Vec::new()).is_empty());
    }
}
