//! Wire types for the Mapbox geocoding API.
//!
//! Only the fields the search layer reads are modelled; everything else in
//! the response is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::{BoundingBox, Coordinates, UK_BOUNDS};

/// Top-level geocoding response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

/// One provider result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawFeature {
    /// Provider id, e.g. `poi.8521` or `address.3341`.
    pub id: String,

    /// Short name.
    #[serde(default)]
    pub text: String,

    /// Full display string.
    #[serde(default)]
    pub place_name: String,

    /// `[lng, lat]`
    #[serde(default)]
    pub center: Option<[f64; 2]>,

    #[serde(default)]
    pub place_type: Vec<String>,

    /// Enclosing places, most specific first.
    #[serde(default)]
    pub context: Vec<ContextEntry>,

    #[serde(default)]
    pub properties: FeatureProperties,
}

/// Entry in a feature's hierarchical context.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContextEntry {
    /// Prefixed by the context type, e.g. `postcode.123`, `place.456`.
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FeatureProperties {
    /// Comma-separated POI categories, e.g. `airport, airfield`.
    #[serde(default)]
    pub category: Option<String>,
}

impl RawFeature {
    /// Build a feature by hand.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        place_name: impl Into<String>,
        place_type: &str,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            place_name: place_name.into(),
            center: Some([coordinates.lng, coordinates.lat]),
            place_type: vec![place_type.to_string()],
            context: Vec::new(),
            properties: FeatureProperties::default(),
        }
    }

    /// Append a context entry.
    pub fn with_context(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.context.push(ContextEntry {
            id: id.into(),
            text: text.into(),
        });
        self
    }

    /// Set the POI category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.properties.category = Some(category.into());
        self
    }

    /// First place type, or `unknown`.
    pub fn primary_type(&self) -> &str {
        self.place_type.first().map_or("unknown", String::as_str)
    }

    /// Text of the first context entry whose id starts with any of `prefixes`.
    pub fn context_text(&self, prefixes: &[&str]) -> Option<&str> {
        self.context
            .iter()
            .find(|c| prefixes.iter().any(|p| c.id.starts_with(p)))
            .map(|c| c.text.as_str())
    }
}

/// Options for a single provider query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Comma-joined provider type filter; `None` is unrestricted.
    pub types: Option<String>,

    /// Maximum number of features.
    pub limit: u8,

    /// Restrict results to this box.
    pub bbox: BoundingBox,

    /// Bias ranking towards this point.
    pub proximity: Option<Coordinates>,
}

impl QueryOptions {
    /// Unrestricted query within the UK.
    pub fn new(limit: u8) -> Self {
        Self {
            types: None,
            limit,
            bbox: UK_BOUNDS,
            proximity: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = if types.is_empty() {
            None
        } else {
            Some(types.join(","))
        };
        self
    }

    pub fn with_proximity(mut self, point: Coordinates) -> Self {
        self.proximity = Some(point);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_provider_response() {
        let json = r#"{
            "type": "FeatureCollection",
            "query": ["heathrow"],
            "features": [{
                "id": "poi.1168231",
                "type": "Feature",
                "place_type": ["poi"],
                "relevance": 1,
                "properties": {"category": "airport, airfield", "maki": "airport"},
                "text": "Heathrow Airport",
                "place_name": "Heathrow Airport, Hounslow, TW6 1EW, United Kingdom",
                "center": [-0.4543, 51.47],
                "context": [
                    {"id": "postcode.8041", "text": "TW6 1EW"},
                    {"id": "locality.2209", "text": "Longford"},
                    {"id": "place.9217", "text": "Hounslow"},
                    {"id": "country.8605", "text": "United Kingdom", "short_code": "gb"}
                ]
            }],
            "attribution": "NOTICE"
        }"#;

        let parsed: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.features.len(), 1);

        let f = &parsed.features[0];
        assert_eq!(f.id, "poi.1168231");
        assert_eq!(f.primary_type(), "poi");
        assert_eq!(f.center, Some([-0.4543, 51.47]));
        assert_eq!(f.context_text(&["postcode"]), Some("TW6 1EW"));
        assert_eq!(f.context_text(&["place", "locality"]), Some("Longford"));
        assert_eq!(f.properties.category.as_deref(), Some("airport, airfield"));
    }

    #[test]
    fn missing_fields_default() {
        let f: RawFeature = serde_json::from_str(r#"{"id": "address.1"}"#).unwrap();
        assert_eq!(f.primary_type(), "unknown");
        assert!(f.center.is_none());
        assert!(f.context.is_empty());
    }

    #[test]
    fn empty_body_has_no_features() {
        let parsed: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(parsed.features.is_empty());
    }

    #[test]
    fn options_join_types() {
        let o = QueryOptions::new(5).with_types(&["poi", "place"]);
        assert_eq!(o.types.as_deref(), Some("poi,place"));
        assert_eq!(o.bbox, UK_BOUNDS);

        let o = QueryOptions::new(5).with_types(&[]);
        assert!(o.types.is_none());
    }
}
