//! The location search service and request dispatch.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CacheConfig, CacheKey, SuggestionCache};
use crate::domain::LocationSuggestion;
use crate::gazetteer::{CATEGORIES, Gazetteer, LocationKind, SearchCategory};
use crate::geocoding::{Geocoder, UpstreamTally};

use super::config::SearchConfig;
use super::error::LocationError;
use super::rank::rank_by_proximity;
use super::request::{LocationQuery, SearchMode, SearchResponse};

/// Location search over a geocoding provider, the gazetteer, and a result cache.
///
/// The search engines themselves live in sibling modules as further
/// `impl` blocks on this type.
pub struct LocationSearch<G> {
    pub(super) geocoder: G,
    pub(super) cache: SuggestionCache,
    pub(super) gazetteer: Gazetteer,
    pub(super) config: SearchConfig,
}

impl<G: Geocoder> LocationSearch<G> {
    pub fn new(geocoder: G, cache: SuggestionCache, config: SearchConfig) -> Self {
        Self {
            geocoder,
            cache,
            gazetteer: Gazetteer::uk(),
            config,
        }
    }

    /// Default search and cache configuration.
    pub fn with_defaults(geocoder: G) -> Self {
        Self::new(
            geocoder,
            SuggestionCache::new(&CacheConfig::default()),
            SearchConfig::default(),
        )
    }

    /// Replace the built-in gazetteer.
    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// All search categories.
    pub fn categories(&self) -> &'static [SearchCategory] {
        CATEGORIES
    }

    /// A gazetteer airport or station as a suggestion.
    pub fn location(&self, id: &str) -> Result<LocationSuggestion, LocationError> {
        self.gazetteer
            .get(id.trim())
            .map(|entry| entry.to_suggestion())
            .ok_or_else(|| LocationError::LocationNotFound(id.to_string()))
    }

    /// Route a request to its engine.
    ///
    /// With a reference point, results are ordered nearest-first.
    pub async fn execute(
        &self,
        request: &LocationQuery,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let strict = request.strict || self.config.strict;

        let data = match request.mode {
            SearchMode::FreeText => self.enhanced_search(&request.query, strict).await?,
            SearchMode::FamousPlaces => self.famous_places_search(&request.query, strict).await?,
            SearchMode::Category => {
                let id = request.category_id.as_deref().ok_or_else(|| {
                    LocationError::InvalidRequest(
                        "categoryId is required for category search".to_string(),
                    )
                })?;
                self.category_search(id, strict).await?
            }
            SearchMode::Terminals => self.terminals_for_request(request, strict).await?,
        };

        Ok(rank_by_proximity(data, request.reference_point))
    }

    /// [`LocationSearch::execute`] wrapped in the response envelope.
    pub async fn handle(&self, request: &LocationQuery) -> SearchResponse {
        let result = self.execute(request).await;
        if let Err(e) = &result {
            debug!(mode = ?request.mode, error = %e, "location search failed");
        }
        result.into()
    }

    async fn terminals_for_request(
        &self,
        request: &LocationQuery,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let location_id = request
            .location_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                LocationError::InvalidRequest(
                    "locationId is required for terminal search".to_string(),
                )
            })?;

        let kind = match request.category_id.as_deref() {
            Some(raw) => LocationKind::parse(raw).ok_or_else(|| {
                LocationError::InvalidRequest(format!(
                    "unknown location kind '{raw}', expected airport or station"
                ))
            })?,
            None => self
                .gazetteer
                .get(location_id)
                .map(|entry| entry.kind)
                .ok_or_else(|| {
                    LocationError::InvalidRequest(
                        "categoryId (airport or station) is required outside the gazetteer"
                            .to_string(),
                    )
                })?,
        };

        let name_hint = Some(request.query.trim()).filter(|q| !q.is_empty());
        self.terminal_search(location_id, kind, name_hint, strict)
            .await
    }

    pub(super) fn ensure_configured(&self) -> Result<(), LocationError> {
        if self.geocoder.is_configured() {
            Ok(())
        } else {
            Err(LocationError::Configuration(
                "geocoding access token is not set".to_string(),
            ))
        }
    }

    pub(super) async fn cached(&self, key: &CacheKey) -> Option<Vec<LocationSuggestion>> {
        let hit = self.cache.get(key).await?;
        debug!(key = key.as_str(), results = hit.len(), "serving cached results");
        Some(hit.as_ref().clone())
    }

    /// Cache a finished result unless it came from a total outage.
    ///
    /// In strict mode a total outage with nothing found is an error.
    pub(super) async fn finish(
        &self,
        key: CacheKey,
        suggestions: Vec<LocationSuggestion>,
        tally: UpstreamTally,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        if tally.all_failed() {
            warn!(
                key = key.as_str(),
                failed = tally.failed,
                "every geocoding request failed; result not cached"
            );
            if strict && suggestions.is_empty() {
                return Err(LocationError::Upstream {
                    failed_queries: tally.failed,
                });
            }
            return Ok(suggestions);
        }

        debug!(
            key = key.as_str(),
            results = suggestions.len(),
            attempted = tally.attempted,
            failed = tally.failed,
            "search complete"
        );
        self.cache.set(key, Arc::new(suggestions.clone())).await;
        Ok(suggestions)
    }
}
