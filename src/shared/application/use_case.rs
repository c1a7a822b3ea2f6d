/// Base trait for query handlers following the CQRS pattern
///
/// Every read path of the catalog is exposed as a handler implementing
/// `Query`, so services can compose handlers without knowing their
/// dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl Query<SearchSeriesQuery, SearchSeriesResult> for SearchSeriesHandler {
///     async fn execute(&self, query: SearchSeriesQuery) -> AppResult<SearchSeriesResult> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
