//! Proximity ranking of suggestions.

use std::cmp::Ordering;

use crate::domain::{Coordinates, LocationSuggestion};

/// Order suggestions nearest-first relative to `reference`.
///
/// Without a reference point the input is returned unchanged. Equal
/// distances keep their input order.
pub fn rank_by_proximity(
    mut suggestions: Vec<LocationSuggestion>,
    reference: Option<Coordinates>,
) -> Vec<LocationSuggestion> {
    let Some(reference) = reference else {
        return suggestions;
    };

    suggestions.sort_by(|a, b| {
        let da = reference.distance_to(&a.coordinates);
        let db = reference.distance_to(&b.coordinates);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });

    suggestions
}
