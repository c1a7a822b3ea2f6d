use std::collections::HashSet;

use crate::modules::catalog::domain::entities::{SeasonWithSeries, Series};

/// Series matches keyed by `series_id`, in first-insertion order.
///
/// Re-inserting a key that is already present is a no-op. Order is only
/// insertion order and carries no relevance meaning.
#[derive(Debug, Default)]
pub struct SeriesMatchSet {
    seen: HashSet<String>,
    matches: Vec<Series>,
}

impl SeriesMatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the series was not yet present
    pub fn insert(&mut self, series: Series) -> bool {
        if self.seen.contains(&series.series_id) {
            return false;
        }
        self.seen.insert(series.series_id.clone());
        self.matches.push(series);
        true
    }

    /// Add series matched directly on their own fields
    pub fn extend_direct(&mut self, series: impl IntoIterator<Item = Series>) {
        for s in series {
            self.insert(s);
        }
    }

    /// Add the parents of matched seasons; seasons without a parent are skipped
    pub fn extend_from_seasons(&mut self, seasons: impl IntoIterator<Item = SeasonWithSeries>) {
        for matched in seasons {
            match matched.series {
                Some(parent) => {
                    self.insert(parent);
                }
                None => log::debug!(
                    "Season '{}' has no resolvable series, skipping",
                    matched.season.season_id
                ),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_vec(self) -> Vec<Series> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::Season;

    fn with_parent(season_id: &str, parent: Option<Series>) -> SeasonWithSeries {
        SeasonWithSeries {
            season: Season::new(season_id, "第1期", 1),
            series: parent,
        }
    }

    #[test]
    fn test_direct_and_season_match_yield_one_entry() {
        let series = Series::new("s1", "進撃の巨人");
        let mut set = SeriesMatchSet::new();
        set.extend_direct(vec![series.clone()]);
        set.extend_from_seasons(vec![with_parent("s1-1", Some(series.clone()))]);

        assert_eq!(set.into_vec(), vec![series]);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut set = SeriesMatchSet::new();
        set.extend_direct(vec![Series::new("b", "B"), Series::new("a", "A")]);
        set.extend_from_seasons(vec![
            with_parent("c-1", Some(Series::new("c", "C"))),
            with_parent("a-2", Some(Series::new("a", "A"))),
        ]);

        let ids: Vec<String> = set.into_vec().into_iter().map(|s| s.series_id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_orphan_seasons_are_skipped() {
        let mut set = SeriesMatchSet::new();
        set.extend_from_seasons(vec![with_parent("orphan", None)]);
        assert!(set.is_empty());
    }
}
