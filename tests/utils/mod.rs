#![allow(dead_code)]

pub mod catalog;
pub mod factories;

pub use catalog::{CatalogBuilder, FailingCatalogRepository, FixedTokenizer};
pub use factories::{EpisodeFactory, SeasonFactory, SeriesFactory};
