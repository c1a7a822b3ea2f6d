pub mod catalog_repository;
pub mod tokenizer;

pub use catalog_repository::CatalogQueryRepository;
pub use tokenizer::Tokenizer;

#[cfg(test)]
pub use catalog_repository::MockCatalogQueryRepository;
