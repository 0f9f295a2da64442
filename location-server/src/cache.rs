//! Time-bounded result cache fronting all provider lookups.
//!
//! Entries expire a fixed TTL after they are written and are evicted lazily
//! when a read finds them stale; a stale entry is never returned. There is
//! no size bound: keys are user-typed queries within one process lifetime.
//!
//! The clock is injectable so expiry can be tested without sleeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::trace;

use crate::domain::LocationSuggestion;
use crate::gazetteer::LocationKind;

/// Default TTL: 10 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry stays servable after it is written.
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Cache key: search mode plus normalized query text.
///
/// Identical text under different modes never collides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// `category:<id>`
    pub fn category(category_id: &str) -> Self {
        Self(format!("category:{category_id}"))
    }

    /// `enhanced:<query>`
    pub fn enhanced(query: &str) -> Self {
        Self(format!("enhanced:{}", normalize_query(query)))
    }

    /// `famous_places:<query>`
    pub fn famous_places(query: &str) -> Self {
        Self(format!("famous_places:{}", normalize_query(query)))
    }

    /// `terminals:<location id>:<kind>`
    pub fn terminals(location_id: &str, kind: LocationKind) -> Self {
        Self(format!("terminals:{}:{}", location_id.trim(), kind.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lower-case, trim, and collapse internal whitespace.
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A cached value and when it stops being servable.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    timestamp: Instant,
    expires_at: Instant,
}

/// TTL cache safe to share between concurrent searches.
///
/// Writes for a key replace the whole entry (last write wins).
pub struct ResultCache<T> {
    entries: RwLock<HashMap<CacheKey, CacheEntry<T>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

/// Cache of finished suggestion lists.
pub type SuggestionCache = ResultCache<Arc<Vec<LocationSuggestion>>>;

impl<T: Clone> ResultCache<T> {
    /// Create a cache using the wall clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a cache with a custom clock.
    pub fn with_clock(config: &CacheConfig, clock: impl Clock + 'static) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: config.ttl,
            clock: Arc::new(clock),
        }
    }

    /// Get a live entry, evicting it if it has expired.
    pub async fn get(&self, key: &CacheKey) -> Option<T> {
        let now = self.clock.now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if now < entry.expires_at => {
                    trace!(
                        key = key.as_str(),
                        age_secs = now.duration_since(entry.timestamp).as_secs(),
                        "cache hit"
                    );
                    return Some(entry.data.clone());
                }
                Some(_) => {}
            }
        }

        // Expired: re-check under the write lock, a fresh set may have landed
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| now >= e.expires_at) {
            entries.remove(key);
        }
        None
    }

    /// Store `data`, replacing any existing entry for the key.
    pub async fn set(&self, key: CacheKey, data: T) {
        let now = self.clock.now();
        let entry = CacheEntry {
            data,
            timestamp: now,
            expires_at: now + self.ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(clock: &ManualClock) -> ResultCache<String> {
        ResultCache::with_clock(&CacheConfig::default(), clock.clone())
    }

    #[test]
    fn default_config() {
        assert_eq!(CacheConfig::default().ttl, Duration::from_secs(600));
    }

    #[tokio::test]
    async fn set_then_get() {
        let clock = ManualClock::new();
        let cache = cache(&clock);
        let key = CacheKey::enhanced("Heathrow");

        assert!(cache.get(&key).await.is_none());
        cache.set(key.clone(), "v".to_string()).await;
        assert_eq!(cache.get(&key).await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn expired_entry_is_evicted_on_read() {
        let clock = ManualClock::new();
        let cache = cache(&clock);
        let key = CacheKey::category("airports");

        cache.set(key.clone(), "v1".to_string()).await;

        clock.advance(Duration::from_secs(599));
        assert_eq!(cache.get(&key).await.as_deref(), Some("v1"));

        // Exactly at expiry the entry is already stale
        clock.advance(Duration::from_secs(1));
        assert!(cache.get(&key).await.is_none());
        assert_eq!(cache.len().await, 0);

        cache.set(key.clone(), "v2".to_string()).await;
        assert_eq!(cache.get(&key).await.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn set_overwrites() {
        let clock = ManualClock::new();
        let cache = cache(&clock);
        let key = CacheKey::enhanced("kings cross");

        cache.set(key.clone(), "old".to_string()).await;
        clock.advance(Duration::from_secs(300));
        cache.set(key.clone(), "new".to_string()).await;

        // The overwrite restarted the TTL
        clock.advance(Duration::from_secs(400));
        assert_eq!(cache.get(&key).await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn expiry_is_per_entry() {
        let clock = ManualClock::new();
        let cache = cache(&clock);

        cache.set(CacheKey::enhanced("a"), "a".to_string()).await;
        clock.advance(Duration::from_secs(500));
        cache.set(CacheKey::enhanced("b"), "b".to_string()).await;
        clock.advance(Duration::from_secs(200));

        assert!(cache.get(&CacheKey::enhanced("a")).await.is_none());
        assert_eq!(cache.get(&CacheKey::enhanced("b")).await.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn clear_empties_cache() {
        let cache: ResultCache<u32> = ResultCache::new(&CacheConfig::default());
        cache.set(CacheKey::enhanced("x"), 1).await;
        assert!(!cache.is_empty().await);
        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[test]
    fn keys_are_mode_qualified() {
        assert_eq!(CacheKey::category("airports").as_str(), "category:airports");
        assert_eq!(CacheKey::enhanced("  Tower   Bridge ").as_str(), "enhanced:tower bridge");
        assert_eq!(
            CacheKey::famous_places("Tower Bridge").as_str(),
            "famous_places:tower bridge"
        );
        assert_eq!(
            CacheKey::terminals("heathrow-airport", LocationKind::Airport).as_str(),
            "terminals:heathrow-airport:airport"
        );
        assert_ne!(CacheKey::enhanced("x"), CacheKey::famous_places("x"));
    }
}
