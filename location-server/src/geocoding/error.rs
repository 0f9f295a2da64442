//! Geocoding client error types.

/// Errors from a single provider call.
///
/// None of these reach callers directly: the fail-open boundary turns every
/// one of them into "no features" and counts it as an upstream failure.
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    /// HTTP request failed (network error, client timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Access token rejected
    #[error("unauthorized: check MAPBOX_ACCESS_TOKEN")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by geocoding provider")]
    RateLimited,

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Query could not be turned into a request URL
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No response within the per-request timeout
    #[error("request timed out")]
    Timeout,

    /// No access token configured
    #[error("geocoding provider not configured: {0}")]
    NotConfigured(&'static str),
}
