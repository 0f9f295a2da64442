//! Geocoding provider client.
//!
//! This module adapts the Mapbox forward-geocoding API into the
//! [`RawFeature`] wire shape and converts features into suggestions.
//!
//! Key characteristics:
//! - One [`Geocoder::query`] is one HTTP request, restricted to the UK
//! - Failures are absorbed at [`fetch_features`]: callers see "no features"
//!   whether the provider found nothing or the request failed
//! - Postcode and city come from the feature's context hierarchy; the region
//!   is always the country constant

mod client;
mod convert;
mod error;
mod fail_open;
mod mock;
mod types;

use std::future::Future;

pub use client::{GeocodingConfig, MapboxClient};
pub use convert::{PROVIDER_ID_PREFIX, to_suggestion, to_suggestions};
pub use error::GeocodingError;
pub use fail_open::{Fetched, UpstreamTally, fetch_features};
pub use mock::{MockGeocoder, RecordedCall};
pub use types::{ContextEntry, FeatureCollection, FeatureProperties, QueryOptions, RawFeature};

/// A forward geocoding provider.
///
/// This abstraction allows the search engines to be tested with scripted data.
pub trait Geocoder: Send + Sync {
    /// Issue one query.
    fn query(
        &self,
        text: &str,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<Vec<RawFeature>, GeocodingError>> + Send;

    /// Whether credentials are present. Searches refuse to start without them.
    fn is_configured(&self) -> bool {
        true
    }
}
