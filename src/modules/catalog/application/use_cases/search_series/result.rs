use crate::modules::catalog::application::dto::SeriesSummary;

/// Matched series, deduplicated by `series_id`. Order carries no ranking.
pub type SearchSeriesResult = Vec<SeriesSummary>;
