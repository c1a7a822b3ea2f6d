pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Episode, RecentEpisode, Season, SeasonWithSeries, Series};
pub use value_objects::{FilterExpr, SeasonField, SeriesField};
