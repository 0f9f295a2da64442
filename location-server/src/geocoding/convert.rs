//! Conversion from provider features to suggestions.

use crate::domain::{Coordinates, LocationSuggestion, REGION, SuggestionMetadata};

use super::types::RawFeature;

/// Prefix marking suggestion ids that came from the geocoder.
pub const PROVIDER_ID_PREFIX: &str = "mapbox:";

/// Convert a provider feature.
///
/// Features without a `center` get `(0, 0)`, which the validity filter
/// drops before anything reaches a caller.
pub fn to_suggestion(feature: &RawFeature) -> LocationSuggestion {
    let coordinates = feature
        .center
        .map_or(Coordinates::new(0.0, 0.0), Coordinates::from_lng_lat);

    let category = feature
        .properties
        .category
        .as_deref()
        .and_then(|c| c.split(',').next())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(feature.primary_type())
        .to_string();

    LocationSuggestion {
        id: format!("{PROVIDER_ID_PREFIX}{}", feature.id),
        address: feature.place_name.clone(),
        main_text: feature.text.clone(),
        secondary_text: feature.place_name.clone(),
        coordinates,
        metadata: SuggestionMetadata {
            primary_type: feature.primary_type().to_string(),
            postcode: feature.context_text(&["postcode"]).map(str::to_string),
            city: feature
                .context_text(&["place", "locality"])
                .map(str::to_string),
            region: REGION.to_string(),
            category,
            place_id: feature.id.clone(),
            parent_place_id: None,
        },
    }
}

/// Convert a batch of features, preserving order.
pub fn to_suggestions(features: &[RawFeature]) -> Vec<LocationSuggestion> {
    features.iter().map(to_suggestion).collect()
}
