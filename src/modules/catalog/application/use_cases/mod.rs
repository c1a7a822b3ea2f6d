pub mod recently_updated_series;
pub mod search_series;

pub use recently_updated_series::{
    RecentlyUpdatedSeriesHandler, RecentlyUpdatedSeriesQuery, RecentlyUpdatedSeriesResult,
};
pub use search_series::{MatchMode, SearchSeriesHandler, SearchSeriesQuery, SearchSeriesResult};
