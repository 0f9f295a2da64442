//! Free-text search and the famous-places variant.

use futures::future::join_all;

use crate::cache::CacheKey;
use crate::domain::LocationSuggestion;
use crate::geocoding::{Geocoder, QueryOptions, UpstreamTally, fetch_features, to_suggestions};

use super::error::LocationError;
use super::merge::{
    LANDMARK_KEYWORDS, contains_any, dedup_by_id, mentions_accommodation, retain_valid,
    sort_by_type_priority,
};
use super::service::LocationSearch;

/// Suffixes appended to a famous-places query; the bare query comes first.
pub const FAMOUS_PLACE_SUFFIXES: &[&str] = &[
    "",
    " landmark",
    " attraction",
    " tourist attraction",
    " monument",
    " historic",
];

/// Whether the hotel-enhanced strategy adds anything for `query`.
fn wants_hotel_hint(query: &str) -> bool {
    !mentions_accommodation(&query.to_lowercase())
}

/// Trim and collapse runs of whitespace, keeping case.
///
/// The cache key, the provider text and the relevance filter must all see
/// the same string.
fn collapse_whitespace(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<G: Geocoder> LocationSearch<G> {
    /// Suggestions for free text.
    ///
    /// Runs a broad query and, unless the text already names accommodation,
    /// a hotel-biased one. Results are merged, deduplicated, and ordered POIs
    /// first, then places, addresses, postcodes, neighbourhoods.
    pub async fn search(&self, query: &str) -> Result<Vec<LocationSuggestion>, LocationError> {
        self.enhanced_search(query, self.config.strict).await
    }

    pub(super) async fn enhanced_search(
        &self,
        query: &str,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let query = collapse_whitespace(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let query = query.as_str();

        let key = CacheKey::enhanced(query);
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        self.ensure_configured()?;

        let timeout = self.config.request_timeout;
        let comprehensive = QueryOptions::new(self.config.comprehensive_limit);
        let hotel = QueryOptions::new(self.config.hotel_limit).with_types(&["poi"]);
        let hotel_query = format!("{query} hotel");

        let (broad, hotels) = futures::join!(
            fetch_features(&self.geocoder, query, &comprehensive, timeout),
            async {
                if wants_hotel_hint(query) {
                    Some(fetch_features(&self.geocoder, &hotel_query, &hotel, timeout).await)
                } else {
                    None
                }
            },
        );

        let mut tally = UpstreamTally::default();
        tally.record(&broad);
        let mut features = broad.features;
        if let Some(hotels) = hotels {
            tally.record(&hotels);
            features.extend(hotels.features);
        }

        let mut suggestions = dedup_by_id(to_suggestions(&features));
        sort_by_type_priority(&mut suggestions);
        let mut suggestions = retain_valid(suggestions);
        suggestions.truncate(self.config.free_text_max_results);

        self.finish(key, suggestions, tally, strict).await
    }

    /// Well-known landmarks matching `query`.
    ///
    /// The query is expanded into several phrasings. A result is kept only
    /// if it mentions the query itself and a landmark word such as
    /// "castle" or "museum".
    pub async fn search_famous_places(
        &self,
        query: &str,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        self.famous_places_search(query, self.config.strict).await
    }

    pub(super) async fn famous_places_search(
        &self,
        query: &str,
        strict: bool,
    ) -> Result<Vec<LocationSuggestion>, LocationError> {
        let query = collapse_whitespace(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let query = query.as_str();

        let key = CacheKey::famous_places(query);
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        self.ensure_configured()?;

        let options = QueryOptions::new(self.config.famous_variant_limit).with_types(&["poi"]);
        let variants: Vec<String> = FAMOUS_PLACE_SUFFIXES
            .iter()
            .map(|suffix| format!("{query}{suffix}"))
            .collect();

        let mut tally = UpstreamTally::default();
        let mut features = Vec::new();

        for batch in variants.chunks(self.config.max_concurrent_queries.max(1)) {
            let futures: Vec<_> = batch
                .iter()
                .map(|variant| {
                    fetch_features(&self.geocoder, variant, &options, self.config.request_timeout)
                })
                .collect();

            for fetched in join_all(futures).await {
                tally.record(&fetched);
                features.extend(fetched.features);
            }
        }

        let needle = query.to_lowercase();
        let mut suggestions: Vec<_> = dedup_by_id(to_suggestions(&features))
            .into_iter()
            .filter(|s| {
                let text = s.search_text();
                text.contains(&needle) && contains_any(&text, LANDMARK_KEYWORDS)
            })
            .collect();
        for s in &mut suggestions {
            s.metadata.category = "landmark".to_string();
        }
        let mut suggestions = retain_valid(suggestions);
        suggestions.truncate(self.config.famous_max_results);

        self.finish(key, suggestions, tally, strict).await
    }
}
