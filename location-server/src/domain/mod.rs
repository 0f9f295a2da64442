//! Core location types.
//!
//! Points, distances and bounds live in [`geo`]; the normalized
//! [`LocationSuggestion`] every search path produces lives in [`suggestion`].

pub mod geo;
pub mod suggestion;

pub use geo::{BoundingBox, Coordinates, EARTH_RADIUS_KM, UK_BOUNDS, distance_km};
pub use suggestion::{LocationSuggestion, REGION, SuggestionMetadata};
