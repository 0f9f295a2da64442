//! Mapbox geocoding HTTP client.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use super::Geocoder;
use super::error::GeocodingError;
use super::types::{FeatureCollection, QueryOptions, RawFeature};

/// Default base URL for forward geocoding.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Mapbox access token
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// ISO country restriction
    pub country: String,
    /// Result language
    pub language: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GeocodingConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: "gb".to_string(),
            language: "en".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the Mapbox forward geocoding endpoint.
///
/// One call is one HTTP request; failures are returned, not retried.
#[derive(Debug, Clone)]
pub struct MapboxClient {
    http: reqwest::Client,
    config: GeocodingConfig,
}

impl MapboxClient {
    /// Create a new client.
    ///
    /// An empty access token is accepted here so the server can start; every
    /// query then fails with [`GeocodingError::NotConfigured`] and the search
    /// layer reports a configuration error.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Build the request URL: `{base}/{query}.json` plus query parameters.
    fn request_url(&self, text: &str, options: &QueryOptions) -> Result<Url, GeocodingError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocodingError::InvalidQuery(format!("bad base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| GeocodingError::InvalidQuery("base URL cannot have a path".into()))?
            .pop_if_empty()
            .push(&format!("{}.json", text.trim()));

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("access_token", &self.config.access_token)
                .append_pair("country", &self.config.country)
                .append_pair("autocomplete", "true")
                .append_pair("limit", &options.limit.to_string())
                .append_pair("language", &self.config.language)
                .append_pair("bbox", &options.bbox.to_query_param());
            if let Some(types) = &options.types {
                query.append_pair("types", types);
            }
            if let Some(point) = &options.proximity {
                query.append_pair("proximity", &point.to_proximity_param());
            }
        }

        Ok(url)
    }
}

impl Geocoder for MapboxClient {
    async fn query(
        &self,
        text: &str,
        options: &QueryOptions,
    ) -> Result<Vec<RawFeature>, GeocodingError> {
        if !self.is_configured() {
            return Err(GeocodingError::NotConfigured("missing access token"));
        }
        if text.trim().is_empty() {
            return Err(GeocodingError::InvalidQuery("empty query".into()));
        }

        let url = self.request_url(text, options)?;
        debug!(query = text, types = ?options.types, limit = options.limit, "geocoding request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Json {
                message: e.to_string(),
            })?;

        Ok(collection.features)
    }

    fn is_configured(&self) -> bool {
        !self.config.access_token.trim().is_empty()
    }
}
