//! Location search engines.
//!
//! [`LocationSearch`] answers four kinds of request:
//! - free text, enriched with a hotel-biased query
//! - a predefined category, geocoded name by name with fallback strategies
//! - terminals and platforms of an airport or station
//! - famous places, filtered to landmark-like results
//!
//! Every engine checks the result cache first, treats provider failures as
//! empty results, and never caches the output of a total provider outage.

mod category;
mod config;
mod error;
mod free_text;
mod merge;
mod rank;
mod request;
mod service;
mod session;
mod terminals;

#[cfg(test)]
mod tests;

pub use config::SearchConfig;
pub use error::{ErrorBody, LocationError};
pub use free_text::FAMOUS_PLACE_SUFFIXES;
pub use merge::{dedup_by_id, retain_valid, sort_by_type_priority, type_priority};
pub use rank::rank_by_proximity;
pub use request::{LocationQuery, SearchMode, SearchResponse};
pub use service::LocationSearch;
pub use session::SearchSession;
