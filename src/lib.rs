pub mod modules;
mod schema;
pub mod shared;

pub use modules::catalog::{
    CatalogQueryRepository, CatalogQueryRepositoryImpl, CatalogSearchService,
    InMemoryCatalogRepository, MatchMode, ScriptRunTokenizer, SeriesSummary, Tokenizer,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::Database;
