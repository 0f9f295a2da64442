//! Fail-open boundary around provider calls.
//!
//! Every provider failure (transport error, non-2xx, bad JSON, timeout) is
//! logged here and turned into zero features. Sibling queries carry on.
//! The [`UpstreamTally`] remembers how many calls failed so the search layer
//! can skip caching outage results and, in strict mode, report them.

use std::time::Duration;

use tracing::warn;

use super::Geocoder;
use super::error::GeocodingError;
use super::types::{QueryOptions, RawFeature};

/// Features from one provider call, with failure absorbed.
#[derive(Debug, Clone, Default)]
pub struct Fetched {
    pub features: Vec<RawFeature>,
    pub failed: bool,
}

/// Run one provider query under a timeout, never failing.
pub async fn fetch_features<G: Geocoder>(
    geocoder: &G,
    text: &str,
    options: &QueryOptions,
    timeout: Duration,
) -> Fetched {
    let result = match tokio::time::timeout(timeout, geocoder.query(text, options)).await {
        Ok(result) => result,
        Err(_) => Err(GeocodingError::Timeout),
    };

    match result {
        Ok(features) => Fetched {
            features,
            failed: false,
        },
        Err(e) => {
            warn!(query = text, types = ?options.types, error = %e, "geocoding query failed, treating as empty");
            Fetched {
                features: Vec::new(),
                failed: true,
            }
        }
    }
}

/// Count of provider calls made by one search and how many failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpstreamTally {
    pub attempted: usize,
    pub failed: usize,
}

impl UpstreamTally {
    pub fn record(&mut self, fetched: &Fetched) {
        self.attempted += 1;
        if fetched.failed {
            self.failed += 1;
        }
    }

    pub fn merge(&mut self, other: UpstreamTally) {
        self.attempted += other.attempted;
        self.failed += other.failed;
    }

    /// At least one call was made and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failed == self.attempted
    }
}
