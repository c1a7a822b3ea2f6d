pub mod episode;
pub mod season;
pub mod series;

pub use episode::{Episode, RecentEpisode};
pub use season::{Season, SeasonWithSeries};
pub use series::Series;
