pub mod series_summary;

pub use series_summary::SeriesSummary;
