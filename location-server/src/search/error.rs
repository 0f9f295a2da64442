//! Caller-visible search errors.

use serde::Serialize;

use crate::gazetteer::CATEGORIES;

/// Errors a search reports to its caller.
///
/// Per-query provider failures are not here: they are absorbed at the
/// geocoding boundary. Only [`LocationError::Upstream`] surfaces them, and
/// only for strict searches where every provider call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// Required provider credential missing
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unknown category id
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// Unknown gazetteer location id
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// Request is missing a field its mode needs
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Every provider call failed and nothing was found
    #[error("all {failed_queries} geocoding requests failed")]
    Upstream { failed_queries: usize },
}

impl LocationError {
    /// Stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LocationError::Configuration(_) => "ConfigurationError",
            LocationError::CategoryNotFound(_) | LocationError::LocationNotFound(_) => {
                "NotFoundError"
            }
            LocationError::InvalidRequest(_) => "InvalidRequest",
            LocationError::Upstream { .. } => "UpstreamFailure",
        }
    }

    /// Extra context for the caller.
    pub fn details(&self) -> String {
        match self {
            LocationError::Configuration(_) => {
                "set MAPBOX_ACCESS_TOKEN to enable location search".to_string()
            }
            LocationError::CategoryNotFound(_) => format!(
                "available categories: {}",
                CATEGORIES.iter().map(|c| c.id).collect::<Vec<_>>().join(", ")
            ),
            LocationError::LocationNotFound(id) => {
                format!("no airport or station with id {id}")
            }
            LocationError::InvalidRequest(msg) => msg.clone(),
            LocationError::Upstream { failed_queries } => {
                format!("{failed_queries} provider requests failed; try again shortly")
            }
        }
    }
}

/// Error payload of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    pub details: String,
}

impl From<&LocationError> for ErrorBody {
    fn from(e: &LocationError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
            details: e.details(),
        }
    }
}
