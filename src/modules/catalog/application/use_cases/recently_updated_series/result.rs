use crate::modules::catalog::application::dto::SeriesSummary;

/// Distinct series, most recently updated first
pub type RecentlyUpdatedSeriesResult = Vec<SeriesSummary>;
