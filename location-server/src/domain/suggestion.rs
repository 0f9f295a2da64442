//! The normalized suggestion returned to callers.

use serde::{Deserialize, Serialize};

use super::geo::Coordinates;

/// Region stamped on every suggestion, whatever the provider reports.
pub const REGION: &str = "United Kingdom";

/// A single candidate location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    /// Gazetteer slug (e.g. `heathrow-airport`) or provider-prefixed id.
    pub id: String,

    /// Full resolved address.
    pub address: String,

    /// Short display label.
    pub main_text: String,

    /// Secondary display line.
    pub secondary_text: String,

    pub coordinates: Coordinates,

    pub metadata: SuggestionMetadata,
}

/// Classification and provenance of a suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionMetadata {
    /// Provider place type (`poi`, `address`, ...) or gazetteer kind.
    pub primary_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    pub region: String,

    pub category: String,

    pub place_id: String,

    /// Owning airport/station for terminals and platforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_place_id: Option<String>,
}

impl LocationSuggestion {
    /// Whether this suggestion may be handed to a caller.
    pub fn is_valid(&self) -> bool {
        self.coordinates.is_valid() && !self.address.trim().is_empty()
    }

    /// Lower-cased label and address, for keyword matching.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.main_text, self.address).to_lowercase()
    }
}
