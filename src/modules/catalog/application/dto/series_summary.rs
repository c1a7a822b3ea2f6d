use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::Series;

/// Series projection handed to the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub series_id: String,
    pub title: String,
    pub title_yomi: Option<String>,
    pub title_en: Option<String>,
}

impl From<Series> for SeriesSummary {
    fn from(series: Series) -> Self {
        Self {
            series_id: series.series_id,
            title: series.title,
            title_yomi: series.title_yomi,
            title_en: series.title_en,
        }
    }
}
