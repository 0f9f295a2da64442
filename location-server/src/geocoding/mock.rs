//! Scripted geocoder for tests and offline development.
//!
//! Responses are keyed by normalized query text, optionally narrowed to a
//! specific type filter. Every call is recorded so tests can assert how
//! many provider requests a search made.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use crate::cache::normalize_query;
use crate::domain::Coordinates;

use super::Geocoder;
use super::error::GeocodingError;
use super::types::{QueryOptions, RawFeature};

/// A call the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub text: String,
    pub types: Option<String>,
    pub proximity: Option<Coordinates>,
}

/// In-memory stand-in for the provider.
#[derive(Debug)]
pub struct MockGeocoder {
    /// (normalized text, type filter) -> features; `None` filter matches any.
    responses: HashMap<(String, Option<String>), Vec<RawFeature>>,
    failures: HashSet<String>,
    delay: Option<Duration>,
    configured: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGeocoder {
    /// A configured mock that answers every query with no features.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failures: HashSet::new(),
            delay: None,
            configured: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A mock reporting missing credentials.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Answer `text` with `features` whatever the type filter.
    pub fn with_features(mut self, text: &str, features: Vec<RawFeature>) -> Self {
        self.responses.insert((normalize_query(text), None), features);
        self
    }

    /// Answer `text` with `features` only for this exact type filter.
    pub fn with_typed_features(mut self, text: &str, types: &str, features: Vec<RawFeature>) -> Self {
        self.responses
            .insert((normalize_query(text), Some(types.to_string())), features);
        self
    }

    /// Fail every query for `text` with a 503.
    pub fn failing(mut self, text: &str) -> Self {
        self.failures.insert(normalize_query(text));
        self
    }

    /// Delay every response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Number of calls for `text`, any type filter.
    pub fn calls_for(&self, text: &str) -> usize {
        let key = normalize_query(text);
        self.calls()
            .iter()
            .filter(|c| normalize_query(&c.text) == key)
            .count()
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for MockGeocoder {
    async fn query(
        &self,
        text: &str,
        options: &QueryOptions,
    ) -> Result<Vec<RawFeature>, GeocodingError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                text: text.to_string(),
                types: options.types.clone(),
                proximity: options.proximity,
            });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = normalize_query(text);

        if self.failures.contains(&key) {
            return Err(GeocodingError::Api {
                status: 503,
                message: "mock failure".to_string(),
            });
        }

        let typed = self.responses.get(&(key.clone(), options.types.clone()));
        let any = self.responses.get(&(key, None));

        let mut features = typed.or(any).cloned().unwrap_or_default();
        features.truncate(options.limit as usize);
        Ok(features)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
