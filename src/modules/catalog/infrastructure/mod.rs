pub mod models;
pub mod persistence;
pub mod tokenizer;

pub use persistence::{CatalogQueryRepositoryImpl, InMemoryCatalogRepository};
pub use tokenizer::ScriptRunTokenizer;
