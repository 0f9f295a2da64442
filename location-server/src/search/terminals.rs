//! Terminal and platform resolution.
//!
//! Gazetteer entries with curated sub-locations are answered offline. Any
//! other id falls back to the provider: locate the parent, then search for
//! terminal or platform POIs biased towards it.

use tracing::debug;

use crate::cache::CacheKey;
use crate::domain::{Coordinates, LocationSuggestion};
use crate::gazetteer::LocationKind;
use crate::geocoding::{Geocoder, QueryOptions, UpstreamTally, fetch_features, to_suggestions};

use super::error::LocationError;
use super::merge::{contains_any, dedup_by_id, retain_valid, sub_location_keywords};
use super::service::LocationSearch;

/// Provider queries used to find sub-locations of `name`.
fn fallback_queries(name: &str, kind: LocationKind) -> Vec<String> {
    match kind {
        LocationKind::Airport => vec![
            format!("{name} terminal"),
            format!("{name} departures"),
            format!("{name} arrivals"),
        ],
        LocationKind::Station => vec![
            format!("{name} platform"),
            format!("{name} railway station"),
        ],
    }
}

/// Turn a slug like `farnborough-airport` into `farnborough airport`.
fn name_from_id(location_id: &str) -> String {
    location_id
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl<G: Geocoder> LocationSearch<G> {
    /// Terminals of an airport or platforms of a station.
    ///
    /// An empty result is a success: not every location has sub-locations.
    pub async fn search_terminals(
        &self,
        location_id: &str,
        kind: LocationKind,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        self.terminal_search(location_id.trim(), kind, None, self.config.strict)
            .await
    }

    pub(super) async fn terminal_search(
        &self,
        location_id: &str,
        kind: LocationKind,
        name_hint: Option<&str>,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let key = CacheKey::terminals(location_id, kind);
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }

        let entry = self.gazetteer.get(location_id);

        if let Some(entry) = entry.filter(|e| !e.terminals.is_empty()) {
            let suggestions: Vec<_> = entry
                .terminals
                .iter()
                .map(|t| t.to_suggestion(entry))
                .collect();
            return self
                .finish(key, suggestions, UpstreamTally::default(), strict)
                .await;
        }

        self.ensure_configured()?;

        let parent_name = match (entry, name_hint) {
            (Some(entry), _) => entry.name.to_string(),
            (None, Some(hint)) => hint.to_string(),
            (None, None) => name_from_id(location_id),
        };

        let mut tally = UpstreamTally::default();

        let parent = match entry {
            Some(entry) => Some(entry.coordinates),
            None => {
                let (found, locate_tally) = self.locate_parent(&parent_name).await;
                tally.merge(locate_tally);
                found
            }
        };

        let Some(parent) = parent else {
            debug!(location_id, name = %parent_name, "could not locate parent location");
            return self.finish(key, Vec::new(), tally, strict).await;
        };

        let options = QueryOptions::new(self.config.terminal_query_limit)
            .with_types(&["poi"])
            .with_proximity(parent);

        let mut features = Vec::new();
        for query in fallback_queries(&parent_name, kind) {
            let fetched =
                fetch_features(&self.geocoder, &query, &options, self.config.request_timeout)
                    .await;
            tally.record(&fetched);
            features.extend(fetched.features);
        }

        let parent_lower = parent_name.to_lowercase();
        let keywords = sub_location_keywords(kind);
        let mut suggestions: Vec<_> = dedup_by_id(to_suggestions(&features))
            .into_iter()
            .filter(|s| {
                let text = s.search_text();
                contains_any(&text, keywords) && text.contains(&parent_lower)
            })
            .collect();
        for s in &mut suggestions {
            s.metadata.primary_type = kind.sub_location().as_str().to_string();
            s.metadata.category = kind.as_str().to_string();
            s.metadata.parent_place_id = Some(location_id.to_string());
        }

        self.finish(key, retain_valid(suggestions), tally, strict)
            .await
    }

    /// Coordinates of the best provider match for `name`.
    async fn locate_parent(&self, name: &str) -> (Option<Coordinates>, UpstreamTally) {
        let options = QueryOptions::new(1).with_types(&["poi"]);
        let fetched =
            fetch_features(&self.geocoder, name, &options, self.config.request_timeout).await;

        let mut tally = UpstreamTally::default();
        tally.record(&fetched);

        let found = to_suggestions(&fetched.features)
            .into_iter()
            .find(LocationSuggestion::is_valid)
            .map(|s| s.coordinates);
        (found, tally)
    }
}
