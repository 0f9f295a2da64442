//! Search configuration.

use std::time::Duration;

/// Configuration parameters for location search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Features requested per category query string.
    pub category_query_limit: u8,

    /// Maximum suggestions returned by a category search.
    pub category_max_results: usize,

    /// Features requested by the broad free-text strategy.
    pub comprehensive_limit: u8,

    /// Features requested by the hotel-enhanced strategy.
    pub hotel_limit: u8,

    /// Maximum suggestions returned by a free-text search.
    pub free_text_max_results: usize,

    /// Features requested per famous-places variant.
    pub famous_variant_limit: u8,

    /// Maximum suggestions returned by a famous-places search.
    pub famous_max_results: usize,

    /// Features requested per terminal/platform query.
    pub terminal_query_limit: u8,

    /// Provider queries allowed in flight at once within one search.
    pub max_concurrent_queries: usize,

    /// Per-request timeout; a timeout counts as an empty result.
    pub request_timeout: Duration,

    /// Report an error when every provider call of a search failed and
    /// nothing was found, instead of an empty success.
    pub strict: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            category_query_limit: 5,
            category_max_results: 20,
            comprehensive_limit: 10,
            hotel_limit: 5,
            free_text_max_results: 30,
            famous_variant_limit: 8,
            famous_max_results: 15,
            terminal_query_limit: 10,
            max_concurrent_queries: 4,
            request_timeout: Duration::from_secs(6),
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.category_max_results, 20);
        assert_eq!(config.free_text_max_results, 30);
        assert_eq!(config.max_concurrent_queries, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(6));
        assert!(!config.strict);
    }
}
