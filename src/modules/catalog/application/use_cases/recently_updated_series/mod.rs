mod handler;
mod query;
mod result;

pub use handler::RecentlyUpdatedSeriesHandler;
pub use query::RecentlyUpdatedSeriesQuery;
pub use result::RecentlyUpdatedSeriesResult;
