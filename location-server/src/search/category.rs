//! Category search: geocode each of a category's place names.
//!
//! Each name is tried with progressively looser type filters: the category's
//! own types, then `place`, then no filter. The first strategy that returns
//! anything wins and later ones are skipped for that name.

use futures::future::join_all;
use tracing::debug;

use crate::cache::CacheKey;
use crate::domain::LocationSuggestion;
use crate::gazetteer::{SearchCategory, categories};
use crate::geocoding::{Geocoder, QueryOptions, RawFeature, UpstreamTally, fetch_features, to_suggestions};

use super::error::LocationError;
use super::merge::{dedup_by_id, retain_valid};
use super::service::LocationSearch;

impl<G: Geocoder> LocationSearch<G> {
    /// Suggestions for a predefined category.
    pub async fn search_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        self.category_search(category_id, self.config.strict).await
    }

    pub(super) async fn category_search(
        &self,
        category_id: &str,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let category = categories::find(category_id.trim())
            .ok_or_else(|| LocationError::CategoryNotFound(category_id.to_string()))?;

        let key = CacheKey::category(category.id);
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        self.ensure_configured()?;

        let strategies = self.strategies_for(category);

        let mut tally = UpstreamTally::default();
        let mut features = Vec::new();

        for batch in category
            .search_queries
            .chunks(self.config.max_concurrent_queries.max(1))
        {
            let futures: Vec<_> = batch
                .iter()
                .map(|query| self.first_productive_strategy(query, &strategies))
                .collect();

            for (found, query_tally) in join_all(futures).await {
                tally.merge(query_tally);
                features.extend(found);
            }
        }

        let mut suggestions = dedup_by_id(to_suggestions(&features));
        for s in &mut suggestions {
            s.metadata.category = category.id.to_string();
        }
        let mut suggestions = retain_valid(suggestions);
        suggestions.truncate(self.config.category_max_results);

        self.finish(key, suggestions, tally, strict).await
    }

    /// Query options per strategy, most specific first, without repeats.
    fn strategies_for(&self, category: &SearchCategory) -> Vec<QueryOptions> {
        let limit = self.config.category_query_limit;
        let candidates = [
            QueryOptions::new(limit).with_types(category.types),
            QueryOptions::new(limit).with_types(&["place"]),
            QueryOptions::new(limit),
        ];

        let mut strategies: Vec<QueryOptions> = Vec::with_capacity(candidates.len());
        for options in candidates {
            if !strategies.iter().any(|s| s.types == options.types) {
                strategies.push(options);
            }
        }
        strategies
    }

    async fn first_productive_strategy(
        &self,
        query: &str,
        strategies: &[QueryOptions],
    ) -> (Vec<RawFeature>, UpstreamTally) {
        let mut tally = UpstreamTally::default();

        for options in strategies {
            let fetched =
                fetch_features(&self.geocoder, query, options, self.config.request_timeout).await;
            tally.record(&fetched);

            if !fetched.features.is_empty() {
                return (fetched.features, tally);
            }
        }

        debug!(query, "no strategy produced results");
        (Vec::new(), tally)
    }
}
