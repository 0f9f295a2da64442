//! UK location search server.
//!
//! Answers "where exactly?" for a ride-booking front end: free-text place
//! search, curated categories, airport terminals and station platforms,
//! and famous landmarks, all restricted to the United Kingdom.

pub mod cache;
pub mod domain;
pub mod gazetteer;
pub mod geocoding;
pub mod search;
pub mod web;
