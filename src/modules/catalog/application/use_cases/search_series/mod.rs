mod handler;
mod query;
mod result;

pub use handler::SearchSeriesHandler;
pub use query::{MatchMode, SearchSeriesQuery};
pub use result::SearchSeriesResult;
