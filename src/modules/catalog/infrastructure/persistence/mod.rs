pub mod catalog_query_repository_impl;
pub mod filter_sql;
pub mod in_memory_catalog_repository;

pub use catalog_query_repository_impl::CatalogQueryRepositoryImpl;
pub use in_memory_catalog_repository::InMemoryCatalogRepository;
