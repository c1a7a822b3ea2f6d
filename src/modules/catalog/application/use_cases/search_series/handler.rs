use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::dto::SeriesSummary;
use crate::modules::catalog::application::ports::{CatalogQueryRepository, Tokenizer};
use crate::modules::catalog::domain::services::{PredicateBuilder, QueryVariants, SeriesMatchSet};
use crate::modules::catalog::domain::{FilterExpr, SeasonField, SeriesField};
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};

use super::{
    query::{MatchMode, SearchSeriesQuery},
    result::SearchSeriesResult,
};

/// Query handler for title search across series and their seasons
pub struct SearchSeriesHandler {
    repository: Arc<dyn CatalogQueryRepository>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl SearchSeriesHandler {
    pub fn new(repository: Arc<dyn CatalogQueryRepository>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            repository,
            tokenizer,
        }
    }

    fn build_filters(
        variants: &QueryVariants,
        mode: MatchMode,
    ) -> Option<(FilterExpr<SeriesField>, FilterExpr<SeasonField>)> {
        match mode {
            MatchMode::Strict => Some((
                PredicateBuilder::strict(variants)?,
                PredicateBuilder::strict(variants)?,
            )),
            MatchMode::Broad => Some((
                PredicateBuilder::broad(variants)?,
                PredicateBuilder::broad(variants)?,
            )),
        }
    }
}

#[async_trait]
impl Query<SearchSeriesQuery, SearchSeriesResult> for SearchSeriesHandler {
    async fn execute(&self, query: SearchSeriesQuery) -> AppResult<SearchSeriesResult> {
        query.validate()?;
        LogContext::search_operation(&query.text, Some(query.mode.as_str()), None);
        let timer = TimedOperation::new("search_series");

        let tokens = self.tokenizer.tokenize(&query.text)?;
        let variants = QueryVariants::expand(&query.text, &tokens);
        log::debug!(
            "Expanded '{}' into {} token groups and {} whole-query variants",
            query.text,
            variants.token_groups.len(),
            variants.whole_query.len()
        );

        // A query without usable tokens matches nothing rather than everything
        let Some((series_filter, season_filter)) = Self::build_filters(&variants, query.mode)
        else {
            log::debug!("No usable tokens in '{}', returning no matches", query.text);
            timer.finish_with_info("no usable tokens");
            return Ok(Vec::new());
        };

        let (direct, via_seasons) = tokio::try_join!(
            self.repository.find_series(&series_filter),
            self.repository.find_seasons_with_series(&season_filter),
        )?;
        log::debug!(
            "Search '{}': {} direct series, {} matching seasons",
            query.text,
            direct.len(),
            via_seasons.len()
        );

        let mut matches = SeriesMatchSet::new();
        matches.extend_direct(direct);
        matches.extend_from_seasons(via_seasons);

        LogContext::search_operation(&query.text, Some(query.mode.as_str()), Some(matches.len()));
        timer.finish();

        Ok(matches
            .into_vec()
            .into_iter()
            .map(SeriesSummary::from)
            .collect())
    }
}
