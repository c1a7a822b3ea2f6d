/// Shared infrastructure concerns
///
/// Infrastructure implementations used by more than one module.
pub mod database;

pub use database::{Database, DbConnection};
