//! Result merging shared by the search engines.
//!
//! Every engine funnels provider output through the same steps: dedupe by
//! id keeping the first occurrence, optionally order by feature type, drop
//! invalid coordinates, cap.

use std::collections::HashSet;

use crate::domain::LocationSuggestion;
use crate::gazetteer::LocationKind;

/// Substrings marking a query as already about accommodation.
pub const ACCOMMODATION_KEYWORDS: &[&str] = &[
    "hotel",
    "travelodge",
    "hostel",
    "motel",
    "resort",
    "b&b",
    "guest house",
    "apartments",
    "suites",
];

/// Accommodation words that only count as whole words ("Pinner" is not an inn).
const ACCOMMODATION_WORDS: &[&str] = &["inn", "inns", "lodge"];

/// Words a famous-place result must mention.
pub const LANDMARK_KEYWORDS: &[&str] = &[
    "palace",
    "castle",
    "museum",
    "gallery",
    "park",
    "square",
    "bridge",
    "tower",
    "cathedral",
    "abbey",
    "stadium",
    "arena",
];

const AIRPORT_TERMINAL_KEYWORDS: &[&str] = &["terminal", "platform", "departure", "arrival"];
const STATION_PLATFORM_KEYWORDS: &[&str] = &["platform", "railway"];

/// Keywords identifying a sub-location of `kind`.
pub fn sub_location_keywords(kind: LocationKind) -> &'static [&'static str] {
    match kind {
        LocationKind::Airport => AIRPORT_TERMINAL_KEYWORDS,
        LocationKind::Station => STATION_PLATFORM_KEYWORDS,
    }
}

/// Whether `text` contains any of `keywords`. `text` must already be lowercase.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Whether `text` names accommodation. `text` must already be lowercase.
pub fn mentions_accommodation(text: &str) -> bool {
    contains_any(text, ACCOMMODATION_KEYWORDS)
        || text
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| ACCOMMODATION_WORDS.contains(&word))
}

/// Ordering weight of a provider feature type; lower sorts first.
pub fn type_priority(primary_type: &str) -> u8 {
    match primary_type {
        "poi" => 0,
        "place" => 1,
        "address" => 2,
        "postcode" => 3,
        "neighborhood" => 4,
        _ => 5,
    }
}

/// Keep the first occurrence of each id, preserving order.
pub fn dedup_by_id(suggestions: Vec<LocationSuggestion>) -> Vec<LocationSuggestion> {
    let mut seen = HashSet::with_capacity(suggestions.len());
    suggestions
        .into_iter()
        .filter(|s| seen.insert(s.id.clone()))
        .collect()
}

/// Stable sort by [`type_priority`].
pub fn sort_by_type_priority(suggestions: &mut [LocationSuggestion]) {
    suggestions.sort_by_key(|s| type_priority(&s.metadata.primary_type));
}

/// Drop suggestions whose coordinates are unusable.
pub fn retain_valid(mut suggestions: Vec<LocationSuggestion>) -> Vec<LocationSuggestion> {
    suggestions.retain(LocationSuggestion::is_valid);
    suggestions
}
