use serde::{Deserialize, Serialize};

use super::series::Series;

/// A season (cour) of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub season_id: String,
    pub season_title: String,
    pub season_title_yomi: Option<String>,
    /// Order within the parent series
    pub season_number: i32,

    // Broadcast metadata
    pub shoboi_tid: Option<i32>,
    pub description: Option<String>,
    pub first_year: Option<i32>,
    pub first_month: Option<i32>,
    pub first_end_year: Option<i32>,
    pub first_end_month: Option<i32>,
}

impl Season {
    pub fn new(
        season_id: impl Into<String>,
        season_title: impl Into<String>,
        season_number: i32,
    ) -> Self {
        Self {
            season_id: season_id.into(),
            season_title: season_title.into(),
            season_title_yomi: None,
            season_number,
            shoboi_tid: None,
            description: None,
            first_year: None,
            first_month: None,
            first_end_year: None,
            first_end_month: None,
        }
    }

    pub fn with_title_yomi(mut self, title_yomi: impl Into<String>) -> Self {
        self.season_title_yomi = Some(title_yomi.into());
        self
    }
}

/// A season matched by storage together with its eagerly loaded parent.
///
/// `series` is `None` when the parent reference could not be resolved; such
/// rows are skipped during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonWithSeries {
    pub season: Season,
    pub series: Option<Series>,
}
