//! Caller envelope for location searches.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, LocationSuggestion};

use super::error::{ErrorBody, LocationError};

/// Which engine a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    #[default]
    FreeText,
    Category,
    Terminals,
    FamousPlaces,
}

/// A search request.
///
/// `category_id` names the category in `category` mode and the location
/// kind (`airport` / `station`) in `terminals` mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_point: Option<Coordinates>,
    /// Report a total provider outage as an error.
    #[serde(default)]
    pub strict: bool,
}

impl LocationQuery {
    pub fn free_text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn famous_places(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mode: SearchMode::FamousPlaces,
            ..Self::default()
        }
    }

    pub fn category(category_id: impl Into<String>) -> Self {
        Self {
            mode: SearchMode::Category,
            category_id: Some(category_id.into()),
            ..Self::default()
        }
    }

    pub fn terminals(location_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            mode: SearchMode::Terminals,
            location_id: Some(location_id.into()),
            category_id: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn near(mut self, point: Coordinates) -> Self {
        self.reference_point = Some(point);
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

/// Response envelope: `data` on success, `error` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<LocationSuggestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl SearchResponse {
    pub fn ok(data: Vec<LocationSuggestion>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: &LocationError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody::from(error)),
        }
    }
}

impl From<Result<Vec<LocationSuggestion>, LocationError>> for SearchResponse {
    fn from(result: Result<Vec<LocationSuggestion>, LocationError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(&e),
        }
    }
}
